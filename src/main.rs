use algo_lesson::LessonApp;

const APP_NAME: &str = "Урок информатики: Алгоритмы";

/// Variable de entorno con la ruta a otra lección YAML
#[cfg(not(target_arch = "wasm32"))]
const LESSON_FILE_ENV: &str = "ALGO_LESSON_FILE";

#[cfg(not(target_arch = "wasm32"))]
fn load_app() -> algo_lesson::Result<LessonApp> {
    if let Ok(path) = std::env::var(LESSON_FILE_ENV) {
        match algo_lesson::data::read_lesson_file(&path) {
            Ok(lesson) => {
                log::info!("lección cargada desde {path}");
                return Ok(LessonApp::new(lesson));
            }
            Err(e) => log::warn!("no se pudo cargar {path}: {e}; se usa la lección embebida"),
        }
    }
    LessonApp::from_embedded()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let app = load_app().map_err(|e| {
        log::error!("lección inválida: {e}");
        eframe::Error::AppCreation(Box::new(e))
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(APP_NAME, options, Box::new(move |_cc| Ok(Box::new(app))))
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no hay documento web");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("no se encontró el canvas `the_canvas_id`");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| {
                    let app = LessonApp::from_embedded()?;
                    Ok(Box::new(app))
                }),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("no se pudo arrancar eframe: {e:?}");
        }
    });
}
