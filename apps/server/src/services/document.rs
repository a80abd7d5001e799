//! Word document output for formatted sets.
//!
//! Each question becomes one paragraph: the numbered prompt followed by one
//! soft-wrapped run per answer line. The correct option keeps its `" ="` marker
//! and is colored red.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use docx_rs::{BreakType, Docx, LineSpacing, Paragraph, Run};
use quiz_core::{is_correct_line, question_blocks, FormattedSet, QuestionBlock};
use thiserror::Error;
use tokio::task::JoinHandle;

const CORRECT_COLOR: &str = "FF0000";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to pack document: {0}")]
    Pack(String),
    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the paragraph for one question.
pub fn question_paragraph(block: &QuestionBlock) -> Paragraph {
    // No space around paragraphs; 276/240 = 1.15 lines.
    let spacing = LineSpacing::new().before(0).after(0).line(276);
    let heading = Run::new().add_text(block.heading());

    block.lines.iter().fold(
        Paragraph::new().add_run(heading).line_spacing(spacing),
        |paragraph, line| {
            let mut run = Run::new()
                .add_break(BreakType::TextWrapping)
                .add_text(line.as_str());
            if is_correct_line(line) {
                run = run.color(CORRECT_COLOR);
            }
            paragraph.add_run(run)
        },
    )
}

/// Build the whole document, one paragraph per item in set order.
pub fn build_document(set: &FormattedSet) -> Docx {
    question_blocks(set)
        .iter()
        .fold(Docx::new(), |docx, block| docx.add_paragraph(question_paragraph(block)))
}

/// Pack the document into an in-memory `.docx` package.
pub fn render(set: &FormattedSet) -> Result<Vec<u8>, DocumentError> {
    let mut buf = Cursor::new(Vec::new());
    build_document(set)
        .build()
        .pack(&mut buf)
        .map_err(|e| DocumentError::Pack(e.to_string()))?;
    Ok(buf.into_inner())
}

/// Render and write the document, replacing any existing file.
pub async fn save(set: &FormattedSet, path: &Path) -> Result<(), DocumentError> {
    let bytes = render(set)?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

/// Write the document in the background; the outcome is only logged.
///
/// Concurrent calls for the same path race, and the last writer wins.
pub fn spawn_save(set: FormattedSet, path: PathBuf) -> JoinHandle<()> {
    tokio::spawn(async move {
        match save(&set, &path).await {
            Ok(()) => tracing::info!("Document saved at: {}", path.display()),
            Err(e) => tracing::error!("Failed to save document {}: {}", path.display(), e),
        }
    })
}
