//! Server-rendered preview of every component variant.

use uk_core::card::{self, CardConfig};
use uk_core::node::Element;
use uk_core::skeleton::{self, SkeletonConfig};

/// One labelled gallery entry.
struct Sample {
    label: &'static str,
    tree: Element,
}

fn samples() -> Vec<Sample> {
    vec![
        Sample {
            label: "Skeleton (count = 3)",
            tree: skeleton::render(&SkeletonConfig::new().count(3)),
        },
        Sample {
            label: "Skeleton (w-1/2, h-8, count = 2)",
            tree: skeleton::render(
                &SkeletonConfig::new().width("w-1/2").height("h-8").count(2),
            ),
        },
        Sample {
            label: "Card",
            tree: card::render(CardConfig::new("Plain body".to_string())),
        },
        Sample {
            label: "Card with title and footer",
            tree: card::render(
                CardConfig::new("Name, avatar and bio".to_string())
                    .title("Profile".to_string())
                    .footer("Saved".to_string()),
            ),
        },
        Sample {
            label: "Hover card",
            tree: card::render(
                CardConfig::new("Hover me".to_string())
                    .hover(true)
                    .class("max-w-sm"),
            ),
        },
    ]
}

/// Complete HTML document for the gallery page.
pub fn page() -> String {
    let mut body = String::new();
    for sample in samples() {
        body.push_str("<section class=\"space-y-2\"><h2 class=\"text-sm text-gray-500\">");
        body.push_str(sample.label);
        body.push_str("</h2>");
        body.push_str(&sample.tree.to_html());
        body.push_str("</section>");
    }
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>ui-kit gallery</title>\
         <script src=\"https://cdn.tailwindcss.com\"></script></head>\
         <body class=\"p-8 space-y-8 bg-gray-100\">{body}</body></html>"
    )
}
