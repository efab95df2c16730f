use uk_core::node::Element;
use uk_core::skeleton::{self, SkeletonConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_COUNT};

#[test]
fn default_config() {
    let cfg = SkeletonConfig::default();
    assert_eq!(cfg.width, "w-full");
    assert_eq!(cfg.height, "h-4");
    assert_eq!(cfg.count, 1);
    assert_eq!(cfg.class, "");
}

#[test]
fn block_count_and_keys_match_count() {
    for count in [0usize, 1, 2, 7, 50] {
        let cfg = SkeletonConfig::new().count(count);
        let blocks = skeleton::blocks(&cfg);
        assert_eq!(blocks.len(), count, "count = {count}");
        let keys: Vec<usize> = blocks.iter().map(|b| b.key).collect();
        assert_eq!(keys, (0..count).collect::<Vec<_>>());
    }
}

#[test]
fn zero_count_renders_empty_container() {
    let tree: Element = skeleton::render(&SkeletonConfig::new().count(0));
    assert!(tree.children.is_empty());
    assert!(tree.has_class("space-y-2"));
}

#[test]
fn every_block_carries_dimensions_and_pulse() {
    let cfg = SkeletonConfig::new().width("w-32").height("h-8").count(4);
    let tree: Element = skeleton::render(&cfg);
    assert_eq!(tree.child_elements().count(), 4);
    for block in tree.child_elements() {
        assert!(block.has_class("w-32"));
        assert!(block.has_class("h-8"));
        assert!(block.has_class("animate-pulse"));
        assert!(!block.has_class(DEFAULT_WIDTH));
    }
}

#[test]
fn caller_class_lands_on_container_only() {
    let cfg = SkeletonConfig::new().class("my-6 opacity-75").count(2);
    let tree: Element = skeleton::render(&cfg);
    assert_eq!(tree.class, "space-y-2 my-6 opacity-75");
    for block in tree.child_elements() {
        assert!(!block.has_class("my-6"));
    }
}

#[test]
fn three_default_blocks() {
    let tree: Element = skeleton::render(&SkeletonConfig::new().count(3));
    assert_eq!(tree.keys(), vec![0, 1, 2]);
    for block in tree.child_elements() {
        assert!(block.has_class(DEFAULT_WIDTH));
        assert!(block.has_class(DEFAULT_HEIGHT));
    }
    assert_eq!(tree.class, "space-y-2");
}

#[test]
fn container_is_marked_busy() {
    let tree: Element = skeleton::render(&SkeletonConfig::new());
    assert_eq!(tree.attr("aria-busy"), Some("true"));
    assert_eq!(tree.attr("role"), Some("status"));
}

#[test]
fn html_output_carries_keys() {
    let tree: Element = skeleton::render(&SkeletonConfig::new().count(2));
    let html = tree.to_html();
    assert!(html.contains("data-key=\"0\""));
    assert!(html.contains("data-key=\"1\""));
    assert!(!html.contains("data-key=\"2\""));
}

#[test]
fn deserialize_partial_fills_defaults() {
    let cfg: SkeletonConfig = toml::from_str("count = 3").expect("parse skeleton config");
    assert_eq!(cfg.count, 3);
    assert_eq!(cfg.width, DEFAULT_WIDTH);
    assert_eq!(cfg.height, DEFAULT_HEIGHT);
    assert_eq!(cfg.class, "");

    let empty: SkeletonConfig = toml::from_str("").expect("parse empty");
    assert_eq!(empty, SkeletonConfig::default());
}

#[test]
fn huge_count_is_clamped() {
    let cfg = SkeletonConfig::new().count(usize::MAX);
    assert_eq!(cfg.effective_count(), MAX_COUNT);

    let blocks = skeleton::blocks(&cfg);
    assert_eq!(blocks.len(), MAX_COUNT);
    assert_eq!(blocks.last().map(|b| b.key), Some(MAX_COUNT - 1));
}

#[test]
fn count_at_cap_is_rendered_exactly() {
    let tree: Element = skeleton::render(&SkeletonConfig::new().count(MAX_COUNT));
    assert_eq!(tree.child_elements().count(), MAX_COUNT);
}
