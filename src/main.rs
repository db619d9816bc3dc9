use anyhow::Context;
use atividades::{
    app::App,
    config::{init_tracing, Cli},
    storage::FileStore,
    task_store::TaskStore,
    terminal,
    ui::run_app,
};
use clap::Parser;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let data_dir = cli.resolve_data_dir()?;
    let _log_guard = init_tracing(&cli.resolve_log_file(&data_dir), cli.verbose)?;

    let store = FileStore::open(&data_dir)
        .with_context(|| format!("failed to open store at {}", data_dir.display()))?;
    info!(data_dir = %data_dir.display(), "starting atividades");
    let mut app = App::new(TaskStore::load(store));

    let result = {
        let (_restore, mut terminal) = terminal::setup().context("failed to set up terminal")?;
        run_app(&mut terminal, &mut app)
    };

    if let Err(err) = &result {
        error!(error = %err, "event loop failed");
    }
    info!(count = app.tasks.len(), "exiting");
    result.context("event loop failed")
}
