//! Strategy document generator.
//!
//! Renders the current strategy into a static, styled, right-to-left HTML
//! document for sharing outside the tool. The file name is derived from the
//! store name.

use crate::models::ContentStrategy;
use crate::utils::text::slug;
use crate::Result;
use std::path::{Path, PathBuf};

fn formatted_list(items: &[String]) -> String {
    let entries: String = items
        .iter()
        .map(|item| format!("<li>{item}</li>"))
        .collect();
    format!("<ul>{entries}</ul>")
}

/// Render the strategy as a self-contained HTML page.
pub fn render(strategy: &ContentStrategy, store_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ar" dir="rtl">
<head>
  <meta charset="UTF-8">
  <title>استراتيجية المحتوى - {store_name}</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Tajawal:wght@400;500;700&display=swap');
    body {{ font-family: 'Tajawal', sans-serif; direction: rtl; text-align: right; background-color: #f9fafb; color: #1f2937; padding: 20px; line-height: 1.7; }}
    .container {{ max-width: 800px; margin: auto; background: white; border-radius: 12px; box-shadow: 0 4px 15px rgba(0,0,0,0.1); padding: 40px; }}
    h1 {{ color: #AC88E8; font-size: 28px; border-bottom: 2px solid #eee; padding-bottom: 15px; margin-bottom: 30px; }}
    h2 {{ color: #AC88E8; font-size: 22px; margin-top: 30px; margin-bottom: 15px; }}
    p, li {{ font-size: 16px; color: #374151; }}
    ul {{ list-style-position: inside; padding-right: 0; margin-top: 5px; }}
    li {{ margin-bottom: 8px; }}
    .section {{ margin-bottom: 25px; padding: 20px; border-radius: 8px; background-color: #f8f9fa; }}
    strong {{ color: #111827; }}
  </style>
</head>
<body>
  <div class="container">
    <h1>استراتيجية المحتوى لـ {store_name}</h1>
    <div class="section"><h2>الرؤية</h2><p>{vision}</p></div>
    <div class="section"><h2>الأهداف</h2>{objectives}</div>
    <div class="section"><h2>الجمهور المستهدف</h2><p>{target_audience}</p></div>
    <div class="section"><h2>الرسائل الأساسية</h2>{core_messages}</div>
    <div class="section"><h2>قنوات التواصل</h2>{channels}</div>
    <div class="section"><h2>الأسلوب البصري والصوتي</h2><p><strong>النبرة:</strong> {tone}</p><p><strong>المظهر:</strong> {visual}</p></div>
    <div class="section"><h2>ملخص خطة المحتوى</h2><p>{overview}</p></div>
    <div class="section"><h2>مقاييس النجاح</h2>{metrics}</div>
  </div>
</body>
</html>
"#,
        store_name = store_name,
        vision = strategy.vision,
        objectives = formatted_list(&strategy.objectives),
        target_audience = strategy.target_audience,
        core_messages = formatted_list(&strategy.core_messages),
        channels = formatted_list(&strategy.channels),
        tone = strategy.style.tone,
        visual = strategy.style.visual,
        overview = strategy.content_plan_overview,
        metrics = formatted_list(&strategy.metrics),
    )
}

/// File name for the exported document, derived from the store name.
pub fn default_file_name(store_name: &str) -> String {
    format!("استراتيجية-{}.html", slug(store_name))
}

/// Render and write the document, returning the path written.
pub fn write_document(
    strategy: &ContentStrategy,
    store_name: &str,
    output: Option<&Path>,
) -> Result<PathBuf> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_file_name(store_name)),
    };
    std::fs::write(&path, render(strategy, store_name))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StrategyStyle;

    fn strategy() -> ContentStrategy {
        ContentStrategy {
            vision: "أن نكون الخيار الأول".to_string(),
            objectives: vec!["هدف 1".to_string(), "هدف 2".to_string()],
            target_audience: "الإناث 25-35".to_string(),
            core_messages: vec!["رسالة".to_string()],
            channels: vec!["Instagram".to_string(), "TikTok".to_string()],
            style: StrategyStyle {
                tone: "ودود".to_string(),
                visual: "إضاءة طبيعية".to_string(),
            },
            content_plan_overview: "ثلاثة أعمدة محتوى".to_string(),
            metrics: vec!["نمو المتابعين".to_string()],
        }
    }

    #[test]
    fn test_render_contains_every_section() {
        let html = render(&strategy(), "أزياء ريم");
        assert!(html.contains("استراتيجية المحتوى لـ أزياء ريم"));
        assert!(html.contains("أن نكون الخيار الأول"));
        assert!(html.contains("<li>هدف 2</li>"));
        assert!(html.contains("<li>TikTok</li>"));
        assert!(html.contains("<strong>النبرة:</strong> ودود"));
        assert!(html.contains("dir=\"rtl\""));
    }

    #[test]
    fn test_default_file_name_slugs_whitespace() {
        assert_eq!(
            default_file_name("أزياء ريم الجديدة"),
            "استراتيجية-أزياء-ريم-الجديدة.html"
        );
    }

    #[test]
    fn test_write_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        let written = write_document(&strategy(), "متجر", Some(&path)).unwrap();
        assert_eq!(written, path);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("استراتيجية المحتوى لـ متجر"));
    }
}
