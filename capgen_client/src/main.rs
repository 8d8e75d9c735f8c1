use capgen::{CaptionRequest, CaptionResponse};
use pico_args::Arguments;

const HELP: &str = "\
Generate social media captions about a topic

USAGE:
  capgen_client --topic <TOPIC> [OPTIONS]

OPTIONS:
  --topic     What the captions are about  [required]
  --platform  Target platform              [default: instagram]
  --style     Tone of the captions         [default: casual]
  --length    Caption length               [default: short]
  --url       Server caption URL           [default: http://127.0.0.1:6969/generate-caption]

FLAGS:
  -h, --help    Print help information
";

struct Args {
    url: String,
    request: CaptionRequest,
}

/// Number each caption and separate them with blank lines.
fn format_captions(captions: &[String]) -> String {
    captions
        .iter()
        .enumerate()
        .map(|(i, caption)| format!("{}. {caption}", i + 1))
        .collect::<Vec<String>>()
        .join("\n\n")
}

/// Pretty-print JSON error bodies and pass anything else through untouched.
fn format_error(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| body.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        println!("{}", HELP);
        std::process::exit(0);
    }

    let args = Args {
        url: pargs
            .value_from_str("--url")
            .unwrap_or("http://127.0.0.1:6969/generate-caption".into()),
        request: CaptionRequest::builder()
            .topic(pargs.value_from_str::<_, String>("--topic")?)
            .platform(
                pargs
                    .value_from_str::<_, String>("--platform")
                    .unwrap_or("instagram".into()),
            )
            .style(
                pargs
                    .value_from_str::<_, String>("--style")
                    .unwrap_or("casual".into()),
            )
            .length(
                pargs
                    .value_from_str::<_, String>("--length")
                    .unwrap_or("short".into()),
            )
            .build(),
    };
    let Args { url, request } = args;

    let response = reqwest::Client::new()
        .post(&url)
        .json(&request)
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await?;
        eprintln!("Error: {status} {}", format_error(&body));
        std::process::exit(1);
    }

    let response = response.json::<CaptionResponse>().await?;
    println!("{}", format_captions(&response.captions));
    Ok(())
}
