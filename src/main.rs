use anyhow::Result;
use argsift::CommandArgs;

fn main() -> Result<()> {
    let args = CommandArgs::from_env()?;
    println!("{args}");

    Ok(())
}
