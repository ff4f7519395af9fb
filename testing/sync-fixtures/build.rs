fn main() -> Result<(), Box<dyn std::error::Error>> {
    rowgen::build!("rowgen.toml")?;

    Ok(())
}
