pub fn setup_tracing() {
    tracing_subscriber::fmt()
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        // logs go to stderr so they never interleave with the menu on stdout.
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .json()
        .init();
}
