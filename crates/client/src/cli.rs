use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sentiment-client", version, about = "Analyze text with a sentiment server")]
pub(crate) struct Args {
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    pub(crate) server: String,
    /// Text to analyze; reads one submission per line from stdin when omitted.
    pub(crate) text: Option<String>,
}
