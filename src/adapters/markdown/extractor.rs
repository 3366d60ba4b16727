//! Block classifier - partitions a Markdown document into typed blocks.

use super::AstExtractor;
use crate::core::ast::{Block, BlockKind, DocumentAst};
use crate::{Error, Result};

const FENCE: &str = "```";

#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownExtractor;

impl AstExtractor for MarkdownExtractor {
    fn extract(&self, source: &str) -> Result<DocumentAst> {
        Ok(DocumentAst {
            blocks: markdown_to_blocks(source)?,
        })
    }
}

/// Splits `markdown` on blank lines and classifies each block, in document order.
///
/// Blank lines inside a fenced code block do not end the block.
pub fn markdown_to_blocks(markdown: &str) -> Result<Vec<Block>> {
    split_raw_blocks(markdown)
        .iter()
        .map(|raw| classify_block(raw))
        .collect()
}

/// Classifies one blank-line-free block and strips its markers.
///
/// Malformed lists fall back to [`BlockKind::Paragraph`]; only an unclosed
/// code fence is an error.
pub fn classify_block(raw: &str) -> Result<Block> {
    let lines: Vec<&str> = raw.trim_start().lines().collect();
    let Some(first) = lines.first().copied() else {
        return Ok(Block::new(BlockKind::Paragraph, ""));
    };

    if let Some(level) = heading_level(first) {
        let title = &first[level + 1..];
        let text = std::iter::once(title)
            .chain(lines[1..].iter().copied())
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ");
        // level is 1..=6
        return Ok(Block::new(BlockKind::Heading(level as u8), text));
    }

    if is_fence_line(first) {
        return classify_code(first, &lines);
    }

    if lines.iter().all(|line| line.starts_with('>')) {
        let text = lines
            .iter()
            .map(|&line| {
                let rest = line[1..].trim_end();
                rest.strip_prefix(' ').unwrap_or(rest)
            })
            .collect::<Vec<_>>()
            .join(" ");
        return Ok(Block::new(BlockKind::Quote, text));
    }

    if let Some(items) = unordered_items(&lines) {
        return Ok(Block::new(BlockKind::UnorderedList, items.join("\n")));
    }

    if let Some(items) = ordered_items(&lines) {
        return Ok(Block::new(BlockKind::OrderedList, items.join("\n")));
    }

    Ok(paragraph(&lines))
}

fn split_raw_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut in_fence = false;

    for line in markdown.lines() {
        if in_fence {
            current.push(line);
            if is_closing_fence(line) {
                in_fence = false;
                flush_block(&mut current, &mut blocks);
            }
        } else if is_fence_line(line) {
            flush_block(&mut current, &mut blocks);
            in_fence = true;
            current.push(line);
        } else if line.trim().is_empty() {
            flush_block(&mut current, &mut blocks);
        } else {
            current.push(line);
        }
    }
    flush_block(&mut current, &mut blocks);

    blocks
}

fn flush_block(current: &mut Vec<&str>, blocks: &mut Vec<String>) {
    let joined = current.join("\n");
    current.clear();
    // Trailing whitespace is kept: "# " is still a heading marker.
    if !joined.trim().is_empty() {
        blocks.push(joined.trim_start().to_string());
    }
}

/// A line opening a fence: ``` plus an optional info string.
fn is_fence_line(line: &str) -> bool {
    line.trim_start()
        .strip_prefix(FENCE)
        .is_some_and(|info| !info.contains('`'))
}

/// A line closing a fence: ``` alone.
fn is_closing_fence(line: &str) -> bool {
    line.trim() == FENCE
}

fn heading_level(line: &str) -> Option<usize> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&level) && line[level..].starts_with(' ') {
        Some(level)
    } else {
        None
    }
}

fn classify_code(first: &str, lines: &[&str]) -> Result<Block> {
    let Some(close) = lines.iter().skip(1).position(|&l| is_closing_fence(l)) else {
        return Err(Error::UnterminatedFence {
            fragment: first.to_string(),
        });
    };
    let close = close + 1;

    // Closed fence with trailing text: not a pure code block.
    if close != lines.len() - 1 {
        return Ok(paragraph(lines));
    }

    let info = first.trim_start()[FENCE.len()..].trim();
    let language = (!info.is_empty()).then(|| info.to_string());
    let body = lines[1..close].join("\n");
    Ok(Block::new(BlockKind::Code { language }, body))
}

fn paragraph(lines: &[&str]) -> Block {
    let text = lines
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join(" ");
    Block::new(BlockKind::Paragraph, text)
}

fn unordered_items<'a>(lines: &[&'a str]) -> Option<Vec<&'a str>> {
    lines
        .iter()
        .map(|&line| {
            line.strip_prefix("- ")
                .or_else(|| line.strip_prefix("* "))
                .map(str::trim_end)
        })
        .collect()
}

fn ordered_items<'a>(lines: &[&'a str]) -> Option<Vec<&'a str>> {
    let mut items = Vec::with_capacity(lines.len());
    let mut expected = 1usize;
    for &line in lines {
        let marker = format!("{expected}. ");
        items.push(line.strip_prefix(marker.as_str())?.trim_end());
        expected += 1;
    }
    Some(items)
}
