use bbgrad::{logging, run, Cli, Command, Context};
use bbgrad::input::RealStdin;
use bbgrad_clipboard::SystemClipboard;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let clipboard = match &cli.command {
        Command::Render(args) => match &args.copy_command {
            Some(command) => SystemClipboard::with_command(command.clone()),
            None => SystemClipboard::new(),
        },
        Command::Inspect(_) => SystemClipboard::new(),
    };

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    let mut ctx = Context {
        stdin: &RealStdin,
        clipboard: &clipboard,
        stdout: &mut stdout,
        stderr: &mut stderr,
    };
    run(cli.command, &mut ctx)
}
