//! Loading placeholder: `count` identical pulsing blocks in a spaced column.

use serde::{Deserialize, Serialize};

use crate::classes::ClassList;
use crate::node::{Element, Node};

pub const DEFAULT_WIDTH: &str = "w-full";
pub const DEFAULT_HEIGHT: &str = "h-4";
pub const DEFAULT_COUNT: usize = 1;
/// Largest number of blocks rendered; larger counts are clamped.
pub const MAX_COUNT: usize = 1024;

const CONTAINER_BASE: &str = "space-y-2";
const BLOCK_BASE: &str = "bg-gray-200 rounded";
const PULSE: &str = "animate-pulse";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkeletonConfig {
    #[serde(default = "default_width")]
    pub width: String,
    #[serde(default = "default_height")]
    pub height: String,
    #[serde(default = "default_count")]
    pub count: usize,
    /// Extra tokens appended to the container.
    #[serde(default)]
    pub class: String,
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            count: default_count(),
            class: String::new(),
        }
    }
}

fn default_width() -> String {
    DEFAULT_WIDTH.into()
}
fn default_height() -> String {
    DEFAULT_HEIGHT.into()
}
fn default_count() -> usize {
    DEFAULT_COUNT
}

impl SkeletonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Width token, falling back to the default when blank.
    pub fn width_token(&self) -> &str {
        non_blank_or(&self.width, DEFAULT_WIDTH)
    }

    pub fn height_token(&self) -> &str {
        non_blank_or(&self.height, DEFAULT_HEIGHT)
    }

    /// Number of blocks actually rendered: `count`, clamped to [`MAX_COUNT`].
    pub fn effective_count(&self) -> usize {
        self.count.min(MAX_COUNT)
    }
}

fn non_blank_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// One placeholder block. `key` is the block's 0-based index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub key: usize,
    pub class: String,
}

pub fn container_class(config: &SkeletonConfig) -> String {
    ClassList::new()
        .push(CONTAINER_BASE)
        .extend(&config.class)
        .build()
}

pub fn block_class(config: &SkeletonConfig) -> String {
    ClassList::new()
        .push(BLOCK_BASE)
        .push(PULSE)
        .push(config.width_token())
        .push(config.height_token())
        .build()
}

/// Blocks keyed `0..n`, where `n` is [`SkeletonConfig::effective_count`].
pub fn blocks(config: &SkeletonConfig) -> Vec<Block> {
    if config.count == 0 {
        tracing::debug!("skeleton rendered with count = 0");
        return Vec::new();
    }
    let count = config.effective_count();
    if count < config.count {
        tracing::warn!(requested = config.count, rendered = count, "skeleton count clamped");
    }
    let class = block_class(config);
    (0..count)
        .map(|key| Block {
            key,
            class: class.clone(),
        })
        .collect()
}

pub fn render<C>(config: &SkeletonConfig) -> Element<C> {
    let children = blocks(config).into_iter().map(|block| {
        Node::Element(
            Element::new("div", block.class)
                .with_key(block.key)
                .with_attr("aria-hidden", "true"),
        )
    });
    Element::new("div", container_class(config))
        .with_attr("role", "status")
        .with_attr("aria-busy", "true")
        .with_children(children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_dimensions_fall_back() {
        let cfg = SkeletonConfig::new().width("").height("  ");
        assert_eq!(
            block_class(&cfg),
            "bg-gray-200 rounded animate-pulse w-full h-4"
        );
    }

    #[test]
    fn caller_class_follows_base() {
        let cfg = SkeletonConfig::new().class("mt-4");
        assert_eq!(container_class(&cfg), "space-y-2 mt-4");
    }
}
