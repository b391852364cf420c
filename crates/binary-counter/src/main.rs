use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;

use binary_counter::app::CounterApp;
use binary_counter::config::CounterConfig;
use counter_engine::device::GpuInit;
use counter_engine::logging::{init_logging, LoggingConfig};
use counter_engine::render::ShaderSources;
use counter_engine::window::Runtime;

fn main() {
    init_logging(LoggingConfig::default());

    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            1
        }
    };

    std::process::exit(code);
}

fn run() -> Result<i32> {
    let config = CounterConfig::from_env();

    // A missing shader file is fatal, before any window opens.
    let paths = config.shaders.resolve()?;
    let sources = ShaderSources::load(&paths)?;

    let exit_code = Rc::new(Cell::new(None));
    let app = CounterApp::new(&config, sources, Rc::clone(&exit_code));

    Runtime::run(config.runtime_config(), GpuInit::default(), app)?;

    Ok(exit_code.get().unwrap_or(0))
}
