//! Bordered container with optional header and footer regions.
//!
//! Class composition is additive and ordered: base tokens, then tokens whose
//! condition holds, then the caller's tokens. Hover styling and click
//! activation are independent toggles.

use crate::classes::ClassList;
use crate::node::{Blank, Element, Handler, Node, Region, RegionKind};

pub const BASE: &str = "bg-white rounded-lg border border-gray-200";
pub const HOVER: &str = "transition-shadow hover:shadow-lg hover:cursor-pointer";
pub const HEADER: &str = "px-6 py-4 border-b border-gray-200";
pub const BODY: &str = "px-6 py-4";
pub const FOOTER: &str = "px-6 py-4 border-t border-gray-200 bg-gray-50";

/// The presentational inputs of a card, without its content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardStyle<'a> {
    pub hover: bool,
    pub activatable: bool,
    pub class: &'a str,
}

pub fn container_class(style: &CardStyle<'_>) -> String {
    ClassList::new()
        .push(BASE)
        .push_if(style.hover, HOVER)
        .extend(style.class)
        .build()
}

/// Attributes an activatable container carries so keyboard users can reach it.
pub fn activation_attrs(activatable: bool) -> &'static [(&'static str, &'static str)] {
    if activatable {
        &[("role", "button"), ("tabindex", "0")]
    } else {
        &[]
    }
}

/// A region is present only when its content is set and not blank.
pub fn region<C: Blank>(content: Option<&C>) -> Region<&C> {
    match content {
        Some(c) if !c.is_blank() => Region::Present(c),
        _ => Region::Absent,
    }
}

#[derive(Debug, Clone)]
pub struct CardConfig<C = String> {
    pub children: Option<C>,
    pub title: Option<C>,
    pub footer: Option<C>,
    pub hover: bool,
    pub on_click: Option<Handler>,
    pub class: String,
}

impl<C> Default for CardConfig<C> {
    fn default() -> Self {
        Self {
            children: None,
            title: None,
            footer: None,
            hover: false,
            on_click: None,
            class: String::new(),
        }
    }
}

impl<C> CardConfig<C> {
    pub fn new(children: C) -> Self {
        Self {
            children: Some(children),
            ..Self::default()
        }
    }

    /// A card with an empty body.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: C) -> Self {
        self.title = Some(title);
        self
    }

    pub fn footer(mut self, footer: C) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn hover(mut self, hover: bool) -> Self {
        self.hover = hover;
        self
    }

    pub fn on_click(mut self, handler: impl Into<Handler>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn style(&self) -> CardStyle<'_> {
        CardStyle {
            hover: self.hover,
            activatable: self.on_click.is_some(),
            class: &self.class,
        }
    }
}

pub fn render<C: Blank>(config: CardConfig<C>) -> Element<C> {
    let style = config.style();
    let mut container = Element::new("div", container_class(&style));
    for &(name, value) in activation_attrs(style.activatable) {
        container = container.with_attr(name, value);
    }

    let has_header = region(config.title.as_ref()).is_present();
    let has_footer = region(config.footer.as_ref()).is_present();

    if let (true, Some(title)) = (has_header, config.title) {
        container = container.with_child(section(HEADER, RegionKind::Header, Some(title)));
    }
    container = container.with_child(section(BODY, RegionKind::Body, config.children));
    if let (true, Some(footer)) = (has_footer, config.footer) {
        container = container.with_child(section(FOOTER, RegionKind::Footer, Some(footer)));
    }

    match config.on_click {
        Some(handler) => container.with_handler(handler),
        None => container,
    }
}

fn section<C>(class: &str, kind: RegionKind, content: Option<C>) -> Element<C> {
    let el = Element::new("div", class).with_region(kind);
    match content {
        Some(c) => el.with_child(Node::Content(c)),
        None => el,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_omits_header() {
        let card = render(CardConfig::new("body".to_string()).title("   ".to_string()));
        assert_eq!(card.regions(), vec![RegionKind::Body]);
    }

    #[test]
    fn activation_attrs_only_when_clickable() {
        let plain = render(CardConfig::new("x".to_string()));
        assert_eq!(plain.attr("role"), None);

        let clickable = render(CardConfig::new("x".to_string()).on_click(|| {}));
        assert_eq!(clickable.attr("role"), Some("button"));
        assert_eq!(clickable.attr("tabindex"), Some("0"));
    }
}
