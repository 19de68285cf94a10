use clap::arg;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("wikirace")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("wikirace")
        .about("Race from one wiki article to another by greedily following links")
        .arg(
            arg!(-s --"start" <URL>)
                .required(true)
                .help("The article to start from"),
        )
        .arg(
            arg!(-f --"finish" <URL>)
                .required(true)
                .help("The article to reach"),
        )
        .arg(
            arg!(-w --"workers" <COUNT>)
                .required(false)
                .help("Number of concurrent scoring workers")
                .value_parser(clap::value_parser!(usize))
                .default_value("50"),
        )
        .arg(
            arg!(--"max-steps" <COUNT>)
                .required(false)
                .help("Give up after this many clicks")
                .value_parser(clap::value_parser!(usize))
                .default_value("100"),
        )
        .arg(
            arg!(--"seed" <SEED>)
                .required(false)
                .help("Seed for the random fallback selector (reproducible runs)")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(--"timeout" <SECS>)
                .required(false)
                .help("Per-request timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("10"),
        )
        .arg(arg!(--"json" "Print the result as JSON").required(false))
        .arg(arg!(-q --"quiet" "Suppress banner and progress output").required(false))
}
