use crate::error::{LessonError, Result};

/// Nota en la escala escolar de cinco puntos.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Mark {
    Poor = 2,
    Satisfactory = 3,
    Good = 4,
    Excellent = 5,
}

impl Mark {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn message(self) -> &'static str {
        match self {
            Mark::Excellent => "Отлично! Вы усвоили материал.",
            Mark::Good => "Хорошо. Есть небольшие пробелы.",
            Mark::Satisfactory => "Удовлетворительно. Стоит повторить тему.",
            Mark::Poor => "Плохо. Изучите презентацию еще раз.",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grade {
    pub mark: Mark,
    pub message: &'static str,
}

// (porcentaje mínimo, nota), de mayor a menor
const THRESHOLDS: [(usize, Mark); 3] = [
    (90, Mark::Excellent),
    (70, Mark::Good),
    (50, Mark::Satisfactory),
];

/// Convierte `score` aciertos sobre `total` preguntas en una nota.
///
/// El porcentaje se compara en enteros (`score * 100 >= p * total`),
/// así 9/10 da exactamente 90 %.
pub fn grade(score: usize, total: usize) -> Result<Grade> {
    if total == 0 {
        return Err(LessonError::InvalidArgument(
            "cannot grade a quiz with zero questions".into(),
        ));
    }
    if score > total {
        return Err(LessonError::InvalidArgument(format!(
            "score {score} is greater than the number of questions {total}"
        )));
    }

    let mark = THRESHOLDS
        .iter()
        .find(|(percent, _)| score * 100 >= percent * total)
        .map(|&(_, mark)| mark)
        .unwrap_or(Mark::Poor);

    Ok(Grade {
        mark,
        message: mark.message(),
    })
}
