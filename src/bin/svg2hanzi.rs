use hanzi_strokes::Result;

use hanzi_strokes::cli::convert::{get_config, run};
use hanzi_strokes::cli::init_logging;

fn main() -> Result<()> {
    let config = get_config()?;
    init_logging(config.verbose);
    run(config)?;

    Ok(())
}
