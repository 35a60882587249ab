use clap::Parser;

#[derive(Parser)]
#[command(name = "tiredness")]
#[command(version)]
#[command(about = "Ask how tired you are and get an honest answer back")]
#[command(long_about = "Tiredness prompts once for a level from 0 (wide awake) to 5 \
(completely exhausted), prints a response for that level, and exits. Anything else \
gets a polite request to try again next time.")]
pub struct Cli {}
