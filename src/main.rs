use std::io;
use libshelf::catalog::factory;
use libshelf::core::domain::Configuration;
use libshelf::shell;
use libshelf::utils::trace::setup_tracing;

fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = Configuration::from_env();
    let mut service = factory::create_catalog_service(&config);
    // a malformed numeric field in the backing file aborts startup
    service.load_from_file()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(service.as_mut(), &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
