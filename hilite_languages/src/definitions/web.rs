//! Stylesheet and markup definitions
//!
//! HTML layers on top of a fresh CSS definition: it keeps every CSS row
//! and property keyword and appends tag keywords and markup rows, so
//! embedded style blocks highlight the same way standalone stylesheets do.

use hilite_engine::language::compile_patterns;
use hilite_engine::{LanguageDefinition, PaletteIndex};

pub fn build_css() -> LanguageDefinition {
    let rows = vec![
        (r#""[^"]*""#, PaletteIndex::String),
        (r"'[^']*'", PaletteIndex::String),
        // hex colors
        (r"\#[0-9a-fA-F]{3,6}", PaletteIndex::Number),
        // numbers with units
        (
            r"[+-]?([0-9]*[.])?[0-9]+(px|em|rem|%|vh|vw|vmin|vmax|ch|ex|cm|mm|in|pt|pc)?",
            PaletteIndex::Number,
        ),
        (r"[a-zA-Z_-][a-zA-Z0-9_-]*", PaletteIndex::Identifier),
        (r"[{}\[\]:;,.\/]", PaletteIndex::Punctuation),
    ];

    let mut def = LanguageDefinition::with_patterns("CSS", compile_patterns(&rows));
    def.case_sensitive = false;
    def.set_keywords(&[
        "align-content", "align-items", "align-self", "all", "animation", "animation-delay",
        "animation-direction", "animation-duration", "animation-fill-mode",
        "animation-iteration-count", "animation-name", "animation-play-state",
        "animation-timing-function", "backface-visibility", "background",
        "background-attachment", "background-blend-mode", "background-clip",
        "background-color", "background-image", "background-origin", "background-position",
        "background-repeat", "background-size", "border", "border-bottom",
        "border-bottom-color", "border-bottom-left-radius", "border-bottom-right-radius",
        "border-bottom-style", "border-bottom-width", "border-collapse", "border-color",
        "border-image", "border-image-outset", "border-image-repeat", "border-image-slice",
        "border-image-source", "border-image-width", "border-left", "border-left-color",
        "border-left-style", "border-left-width", "border-radius", "border-right",
        "border-right-color", "border-right-style", "border-right-width", "border-spacing",
        "border-style", "border-top", "border-top-color", "border-top-left-radius",
        "border-top-right-radius", "border-top-style", "border-top-width", "border-width",
        "bottom", "box-shadow", "box-sizing", "caption-side", "clear", "clip", "color",
        "column-count", "column-fill", "column-gap", "column-rule", "column-rule-color",
        "column-rule-style", "column-rule-width", "column-span", "column-width", "columns",
        "content", "counter-increment", "counter-reset", "cursor", "direction", "display",
        "empty-cells", "filter", "flex", "flex-basis", "flex-direction", "flex-flow",
        "flex-grow", "flex-shrink", "flex-wrap", "float", "font", "font-family",
        "font-feature-settings", "font-kerning", "font-language-override", "font-size",
        "font-size-adjust", "font-stretch", "font-style", "font-synthesis", "font-variant",
        "font-variant-alternates", "font-variant-caps", "font-variant-east-asian",
        "font-variant-ligatures", "font-variant-numeric", "font-variant-position",
        "font-weight", "grid", "grid-area", "grid-auto-columns", "grid-auto-flow",
        "grid-auto-rows", "grid-column", "grid-column-end", "grid-column-gap",
        "grid-column-start", "grid-gap", "grid-row", "grid-row-end", "grid-row-gap",
        "grid-row-start", "grid-template", "grid-template-areas", "grid-template-columns",
        "grid-template-rows", "hanging-punctuation", "height", "hyphens", "image-rendering",
        "isolation", "justify-content", "left", "letter-spacing", "line-break",
        "line-height", "list-style", "list-style-image", "list-style-position",
        "list-style-type", "margin", "margin-bottom", "margin-left", "margin-right",
        "margin-top", "max-height", "max-width", "min-height", "min-width",
        "mix-blend-mode", "object-fit", "object-position", "opacity", "order", "orphans",
        "outline", "outline-color", "outline-offset", "outline-style", "outline-width",
        "overflow", "overflow-wrap", "overflow-x", "overflow-y", "padding",
        "padding-bottom", "padding-left", "padding-right", "padding-top",
        "page-break-after", "page-break-before", "page-break-inside", "perspective",
        "perspective-origin", "pointer-events", "position", "quotes", "resize", "right",
        "scroll-behavior", "tab-size", "table-layout", "text-align", "text-align-last",
        "text-combine-upright", "text-decoration", "text-decoration-color",
        "text-decoration-line", "text-decoration-style", "text-indent", "text-justify",
        "text-orientation", "text-overflow", "text-shadow", "text-transform",
        "text-underline-position", "top", "transform", "transform-origin",
        "transform-style", "transition", "transition-delay", "transition-duration",
        "transition-property", "transition-timing-function", "unicode-bidi", "user-select",
        "vertical-align", "visibility", "white-space", "widows", "width", "word-break",
        "word-spacing", "word-wrap", "writing-mode", "z-index",
    ]);
    def.set_identifiers(
        &[
            "absolute", "auto", "block", "bold", "both", "break-word", "center", "clip",
            "collapse", "content-box", "cover", "dashed", "dotted", "double", "ease",
            "ease-in", "ease-in-out", "ease-out", "fixed", "flex", "hidden", "inherit",
            "initial", "inline", "inline-block", "inline-flex", "italic", "justify", "large",
            "left", "lighter", "line-through", "medium", "none", "normal", "nowrap", "pre",
            "pre-line", "pre-wrap", "relative", "repeat", "repeat-x", "repeat-y", "revert",
            "right", "scroll", "separate", "small", "solid", "static", "sticky", "stretch",
            "thin", "thick", "underline", "unset", "uppercase", "visible",
        ],
        "",
    );
    def.single_line_comment = None;
    def
}

pub fn build_html() -> LanguageDefinition {
    let mut def = build_css();
    def.name = "HTML";

    // tag names join the CSS property keywords
    let tags = [
        "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi",
        "bdo", "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code",
        "col", "colgroup", "data", "datalist", "dd", "del", "details", "dfn", "dialog",
        "div", "dl", "dt", "em", "embed", "fieldset", "figcaption", "figure", "footer",
        "form", "h1", "h2", "h3", "h4", "h5", "h6", "head", "header", "hr", "html", "i",
        "iframe", "img", "input", "ins", "kbd", "label", "legend", "li", "link", "main",
        "map", "mark", "meta", "meter", "nav", "noscript", "object", "ol", "optgroup",
        "option", "output", "p", "picture", "pre", "progress", "q", "rp", "rt", "ruby",
        "s", "samp", "script", "section", "select", "small", "source", "span", "strong",
        "style", "sub", "summary", "sup", "table", "tbody", "td", "template", "textarea",
        "tfoot", "th", "thead", "time", "title", "tr", "track", "u", "ul", "var", "video",
        "wbr",
    ];
    for tag in tags {
        def.keywords.insert(tag);
    }

    def.push_patterns(&[
        (r#""[^"]*""#, PaletteIndex::String),
        (r"'[^']*'", PaletteIndex::String),
        (r"[+-]?([0-9]+([.][0-9]*)?|[.][0-9]+)", PaletteIndex::Number),
        (r"[a-zA-Z_][a-zA-Z0-9_\-]*", PaletteIndex::Identifier),
        (r"[<>\/\=\!]", PaletteIndex::Punctuation),
    ]);

    def.comment_start = Some("<!--");
    def.comment_end = Some("-->");
    def.single_line_comment = None;
    def
}
