//! Check command - report the availability of the external PDF toolchain.

use console::style;

use kaz_core::tools::check_tools_on_path;
use kaz_core::{KazError, REQUIRED_TOOLS, ToolError};

pub fn run() -> anyhow::Result<()> {
    let statuses = check_tools_on_path(&REQUIRED_TOOLS);

    let mut missing = Vec::new();
    for status in &statuses {
        if status.found {
            println!("{:<10} {}", status.name, style("found").green());
        } else {
            println!("{:<10} {}", status.name, style("missing").red());
            missing.push(status.name.clone());
        }
    }

    if missing.is_empty() {
        println!("all required tools are installed");
        Ok(())
    } else {
        Err(KazError::Tool(ToolError::Missing(missing)).into())
    }
}
