fn main() -> anyhow::Result<()> {
    identikit_observability::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    identikit_demo::run(&mut out)?;

    Ok(())
}
