use {
	crate::{Cli, Config},
	anstream::{eprint, eprintln},
	crossterm::{style::Stylize as _, tty::IsTty as _},
	sver_error as sver,
};

impl Cli {
	pub(crate) fn print_error(config: Option<&Config>, error: &sver::Error) {
		let options = config
			.and_then(|config| config.error.as_ref())
			.map(|error| sver::TraceOptions {
				locations: error.locations,
				reverse: error.reverse,
			})
			.unwrap_or_default();
		eprintln!("{}", "error".red().bold());

		// Without a terminal, print the plain trace.
		if !std::io::stderr().is_tty() {
			eprint!("{}", error.trace(&options));
			return;
		}

		let mut errors = error.chain().collect::<Vec<_>>();
		if options.reverse {
			errors.reverse();
		}
		for error in errors {
			eprintln!("{} {}", "->".red(), error.message);
			if let Some(location) = &error.location
				&& options.locations
			{
				let location = location.to_string().yellow();
				eprintln!("   {location}");
			}
			for (name, value) in &error.values {
				let name = name.as_str().blue();
				let value = value.as_str().green();
				eprintln!("   {name} = {value}");
			}
		}
	}
}
