// src/view_models.rs

use crate::grading::Grade;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub counter: Option<String>, // "Слайд i из n", sólo en teoría
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarEntry {
    pub idx: usize,    // índice 0-based en lesson.sections
    pub number: usize, // número "humano" (1,2,3…)
    pub title: String,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    Correct,
    Wrong,
    Dimmed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub idx: usize,
    pub text: String,
    pub state: OptionState,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizProgressInfo {
    pub number: usize, // pregunta actual, 1-based
    pub total: usize,
    pub score: usize,
    pub fraction: f32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizAction {
    Submit { enabled: bool },
    Next { label: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultInfo {
    pub score: usize,
    pub total: usize,
    pub grade: Grade,
}

impl SidebarEntry {
    pub fn label(&self) -> String {
        format!("{}. {}", self.number, self.title)
    }
}

impl QuizProgressInfo {
    pub fn counter_label(&self) -> String {
        format!("Вопрос {} из {}", self.number, self.total)
    }

    pub fn score_label(&self) -> String {
        format!("Очки: {}", self.score)
    }
}

impl ResultInfo {
    pub fn mark_label(&self) -> String {
        format!("Ваша оценка: {}", self.grade.mark.value())
    }
}
