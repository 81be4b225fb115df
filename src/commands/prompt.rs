//! Interactive prompts used when the URL is not given on the command line

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use comment_raffle::crawler::extract_article_id;
use comment_raffle::service::FetchRequest;

/// Ask a question and return the trimmed answer
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read answer")?;
    Ok(line.trim().to_string())
}

/// Ask a y/n question; anything but "y" means no
pub fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<bool> {
    let answer = ask(input, output, &format!("{question} (y/n, default n): "))?;
    Ok(answer.eq_ignore_ascii_case("y"))
}

/// Build a fetch request from the arguments, prompting for what is missing
///
/// The URL is checked before the flag questions so a bad link fails fast.
pub fn resolve_request<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    url: Option<String>,
    fold: bool,
    replies: bool,
) -> Result<FetchRequest> {
    if let Some(url) = url {
        return Ok(FetchRequest::new(url, fold, replies));
    }

    let url = ask(input, output, "Enter CSDN article URL: ")?;
    extract_article_id(&url)?;

    let fold = ask_yes_no(input, output, "Include folded comments?")?;
    let replies = ask_yes_no(input, output, "Include replies?")?;

    Ok(FetchRequest::new(url, fold, replies))
}

/// Resolve the request against the process's stdin/stdout
pub fn resolve_from_terminal(url: Option<String>, fold: bool, replies: bool) -> Result<FetchRequest> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    resolve_request(&mut stdin.lock(), &mut stdout.lock(), url, fold, replies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_arguments_skip_prompts() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        let request = resolve_request(
            &mut input,
            &mut output,
            Some("https://blog.csdn.net/u/article/details/1".to_string()),
            true,
            false,
        )
        .unwrap();

        assert!(output.is_empty());
        assert!(request.include_fold);
        assert!(!request.include_replies);
    }

    #[test]
    fn test_prompts_for_missing_url() {
        let mut input = Cursor::new(b"https://blog.csdn.net/u/article/details/5\ny\nn\n".to_vec());
        let mut output = Vec::new();

        let request = resolve_request(&mut input, &mut output, None, false, false).unwrap();

        assert_eq!(request.url, "https://blog.csdn.net/u/article/details/5");
        assert!(request.include_fold);
        assert!(!request.include_replies);
        assert!(String::from_utf8(output).unwrap().contains("Include replies?"));
    }

    #[test]
    fn test_bad_url_fails_before_flag_prompts() {
        let mut input = Cursor::new(b"https://blog.csdn.net/nothing\n".to_vec());
        let mut output = Vec::new();

        assert!(resolve_request(&mut input, &mut output, None, false, false).is_err());
        assert!(!String::from_utf8(output).unwrap().contains("folded"));
    }

    #[test]
    fn test_yes_no_defaults_to_no() {
        let mut input = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();
        assert!(!ask_yes_no(&mut input, &mut output, "Q?").unwrap());

        let mut input = Cursor::new(b"Y\n".to_vec());
        assert!(ask_yes_no(&mut input, &mut output, "Q?").unwrap());
    }
}
