//! HTML report rendering

use crate::result::ClassifiedSnippet;
use html_escape::encode_safe;
use std::fmt::Write;

const TITLE: &str = "Non-Polish Text Extraction Results";

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; margin: 20px; background-color: #f5f5f5; }
        .container { max-width: 1200px; margin: 0 auto; background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        h1 { color: #333; text-align: center; margin-bottom: 30px; }
        .stats { background: #e8f4f8; padding: 15px; border-radius: 5px; margin-bottom: 20px; text-align: center; }
        .no-content { text-align: center; color: #666; padding: 20px; }
        table { width: 100%; border-collapse: collapse; margin-top: 20px; }
        th, td { border: 1px solid #ddd; padding: 12px; text-align: left; vertical-align: top; }
        th { background-color: #f2f2f2; font-weight: bold; position: sticky; top: 0; }
        tr:nth-child(even) { background-color: #f9f9f9; }
        tr:hover { background-color: #f5f5f5; }
        .lang-code { background: #007bff; color: white; padding: 2px 6px; border-radius: 3px; font-size: 0.9em; font-weight: bold; }
        .text-content { max-width: 400px; word-wrap: break-word; line-height: 1.4; }
        code { background: #f8f9fa; padding: 2px 4px; border-radius: 3px; font-family: monospace; }
        .footer { margin-top: 30px; text-align: center; color: #666; font-size: 0.9em; }
"#;

/// Render the report document for the given non-Polish snippets.
///
/// An empty slice renders the "no content" variant with a zero count.
pub fn render(entries: &[ClassifiedSnippet]) -> String {
    let body = if entries.is_empty() {
        r#"        <div class="stats">
            <strong>Found 0 non-Polish text snippet(s)</strong>
        </div>
        <div class="no-content">
            <p>No non-Polish text content found on this page.</p>
        </div>
"#
        .to_string()
    } else {
        format!(
            r#"        <div class="stats">
            <strong>Found {} non-Polish text snippet(s)</strong>
        </div>
        <table>
            <thead>
                <tr>
                    <th style="width: 50px;">#</th>
                    <th style="width: 100px;">HTML Tag</th>
                    <th style="width: 100px;">Language</th>
                    <th>Text Content</th>
                </tr>
            </thead>
            <tbody>
{}            </tbody>
        </table>
"#,
            entries.len(),
            rows(entries)
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}    </style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
{body}        <div class="footer">
            <p>Generated by Web Page Non-Polish Text Extractor</p>
        </div>
    </div>
</body>
</html>
"#,
        title = TITLE,
        style = STYLE,
        body = body
    )
}

fn rows(entries: &[ClassifiedSnippet]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        // Writing into a String cannot fail
        let _ = write!(
            out,
            r#"                <tr>
                    <td>{}</td>
                    <td><code>&lt;{}&gt;</code></td>
                    <td><span class="lang-code">{}</span></td>
                    <td class="text-content">{}</td>
                </tr>
"#,
            i + 1,
            encode_safe(&entry.tag_name),
            encode_safe(&entry.language_code),
            encode_safe(&entry.text)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tag: &str, lang: &str, text: &str) -> ClassifiedSnippet {
        ClassifiedSnippet {
            tag_name: tag.to_string(),
            language_code: lang.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_empty_report() {
        let html = render(&[]);
        assert!(html.contains("No non-Polish text content found on this page."));
        assert!(html.contains("Found 0 non-Polish text snippet(s)"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_rows_are_numbered_in_order() {
        let html = render(&[
            entry("h1", "en", "Welcome home"),
            entry("p", "de", "Willkommen zu Hause"),
        ]);
        assert!(html.contains("Found 2 non-Polish text snippet(s)"));
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("<td>2</td>"));
        assert!(html.contains("<code>&lt;h1&gt;</code>"));
        assert!(html.contains(r#"<span class="lang-code">de</span>"#));
        let first = html.find("Welcome home").unwrap();
        let second = html.find("Willkommen zu Hause").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render(&[entry("p", "en", "<script>alert('x')</script> & more")]);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; more"));
    }
}
