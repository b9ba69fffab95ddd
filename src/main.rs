fn main() -> anyhow::Result<()> {
    tintkit::run()?;
    Ok(())
}
