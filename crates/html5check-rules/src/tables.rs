//! Default HTML5 rule data.
//!
//! Section numbers refer to the [WHATWG HTML Living Standard](https://html.spec.whatwg.org/multipage/).
//! SVG and MathML entries are keyed by their case-sensitive names, since tags
//! inside an `svg` subtree are never lower-cased.

/// Legal ancestors per element. A candidate element is placeable when any one
/// of its listed parents is open somewhere above it.
pub(crate) const LEGAL_PARENTS: &[(&str, &[&str])] = &[
    // § 4.1 The document element
    ("html", &[]),
    ("head", &["html"]),
    ("body", &["html"]),
    // § 3.2.5.2.1 Metadata content
    ("base", &["head"]),
    ("link", &["head", "body"]),
    ("meta", &["head", "body"]),
    ("noscript", &["head", "body"]),
    ("script", &["head", "body", "svg"]),
    ("style", &["head", "body", "svg"]),
    ("template", &["head", "body"]),
    ("title", &["head", "svg"]),
    // § 3.2.5.2.2 Flow content
    ("a", &["body"]),
    ("abbr", &["body"]),
    ("address", &["body"]),
    ("area", &["map"]),
    ("article", &["body"]),
    ("aside", &["body"]),
    ("audio", &["body"]),
    ("b", &["body"]),
    ("bdi", &["body"]),
    ("bdo", &["body"]),
    ("blockquote", &["body"]),
    ("br", &["body"]),
    ("button", &["body"]),
    ("canvas", &["body"]),
    ("cite", &["body"]),
    ("code", &["body"]),
    ("data", &["body"]),
    ("datalist", &["body"]),
    ("del", &["body"]),
    ("details", &["body"]),
    ("dfn", &["body"]),
    ("dialog", &["body"]),
    ("div", &["body"]),
    ("em", &["body"]),
    ("embed", &["body"]),
    ("fieldset", &["body"]),
    ("figure", &["body"]),
    ("footer", &["body"]),
    ("form", &["body"]),
    ("h1", &["body"]),
    ("h2", &["body"]),
    ("h3", &["body"]),
    ("h4", &["body"]),
    ("h5", &["body"]),
    ("h6", &["body"]),
    ("header", &["body"]),
    ("hgroup", &["body"]),
    ("hr", &["body"]),
    ("i", &["body"]),
    ("iframe", &["body"]),
    ("img", &["body"]),
    ("input", &["body"]),
    ("ins", &["body"]),
    ("kbd", &["body"]),
    ("label", &["body"]),
    ("main", &["body"]),
    ("map", &["body"]),
    ("mark", &["body"]),
    ("math", &["body"]),
    ("menu", &["body"]),
    ("meter", &["body"]),
    ("nav", &["body"]),
    ("object", &["body"]),
    ("ol", &["body"]),
    ("output", &["body"]),
    ("p", &["body"]),
    ("picture", &["body"]),
    ("pre", &["body"]),
    ("progress", &["body"]),
    ("q", &["body"]),
    ("ruby", &["body"]),
    ("s", &["body"]),
    ("samp", &["body"]),
    ("search", &["body"]),
    ("section", &["body"]),
    ("select", &["body"]),
    ("slot", &["body"]),
    ("small", &["body"]),
    ("span", &["body"]),
    ("strong", &["body"]),
    ("sub", &["body"]),
    ("sup", &["body"]),
    ("svg", &["body"]),
    ("table", &["body"]),
    ("textarea", &["body"]),
    ("time", &["body"]),
    ("u", &["body"]),
    ("ul", &["body"]),
    ("var", &["body"]),
    ("video", &["body"]),
    ("wbr", &["body"]),
    // Elements with a specific parent
    ("summary", &["details"]),            // § 4.11.2
    ("legend", &["fieldset"]),            // § 4.10.16
    ("figcaption", &["figure"]),          // § 4.4.13
    ("li", &["ol", "ul", "menu"]),        // § 4.4.8
    ("dl", &["body"]),                    // § 4.4.9
    ("dt", &["dl"]),                      // § 4.4.10
    ("dd", &["dl"]),                      // § 4.4.11
    ("param", &["object"]),               // § 4.8.8
    ("source", &["video", "audio", "picture"]),
    ("track", &["video", "audio"]),
    ("rt", &["ruby"]),                    // § 4.5.11
    ("rp", &["ruby"]),                    // § 4.5.12
    ("optgroup", &["select"]),            // § 4.10.9
    ("option", &["select", "datalist", "optgroup"]), // § 4.10.10
    ("caption", &["table"]),              // § 4.9.2
    ("colgroup", &["table"]),             // § 4.9.3
    ("col", &["colgroup"]),               // § 4.9.4
    ("tbody", &["table"]),                // § 4.9.5
    ("thead", &["table"]),                // § 4.9.6
    ("tfoot", &["table"]),                // § 4.9.7
    ("tr", &["thead", "tbody", "tfoot", "table"]), // § 4.9.8
    ("td", &["tr"]),                      // § 4.9.9
    ("th", &["tr"]),                      // § 4.9.10
    // SVG (case-sensitive)
    ("g", &["svg"]),
    ("defs", &["svg"]),
    ("symbol", &["svg"]),
    ("use", &["svg"]),
    ("desc", &["svg"]),
    ("path", &["svg"]),
    ("rect", &["svg"]),
    ("circle", &["svg"]),
    ("ellipse", &["svg"]),
    ("line", &["svg"]),
    ("polyline", &["svg"]),
    ("polygon", &["svg"]),
    ("text", &["svg"]),
    ("tspan", &["text"]),
    ("textPath", &["text"]),
    ("image", &["svg"]),
    ("marker", &["svg"]),
    ("pattern", &["svg"]),
    ("mask", &["svg"]),
    ("clipPath", &["svg"]),
    ("filter", &["svg"]),
    ("feGaussianBlur", &["filter"]),
    ("feOffset", &["filter"]),
    ("feBlend", &["filter"]),
    ("feColorMatrix", &["filter"]),
    ("linearGradient", &["svg"]),
    ("radialGradient", &["svg"]),
    ("stop", &["linearGradient", "radialGradient"]),
    ("animate", &["svg"]),
    ("animateTransform", &["svg"]),
    ("foreignObject", &["svg"]),
    // MathML
    ("mrow", &["math"]),
    ("mi", &["math"]),
    ("mn", &["math"]),
    ("mo", &["math"]),
    ("ms", &["math"]),
    ("mtext", &["math"]),
    ("mspace", &["math"]),
    ("mfrac", &["math"]),
    ("msqrt", &["math"]),
    ("mroot", &["math"]),
    ("msub", &["math"]),
    ("msup", &["math"]),
    ("msubsup", &["math"]),
    ("mtable", &["math"]),
    ("mtr", &["mtable"]),
    ("mtd", &["mtr"]),
    ("semantics", &["math"]),
    ("annotation", &["semantics"]),
];

/// § 3.2.5.2.1 Metadata content
pub(crate) const METADATA_ELEMENTS: &[&str] = &[
    "base", "link", "meta", "noscript", "script", "style", "template", "title",
];

/// § 13.1.2 Void elements
pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Foreign elements that may be written self-closed (`<stop/>`), in which
/// case they open nothing.
pub(crate) const OPTIONAL_VOID_ELEMENTS: &[&str] = &[
    "svg",
    "g",
    "defs",
    "symbol",
    "use",
    "path",
    "rect",
    "circle",
    "ellipse",
    "line",
    "polyline",
    "polygon",
    "text",
    "tspan",
    "textPath",
    "image",
    "marker",
    "pattern",
    "mask",
    "clipPath",
    "filter",
    "feGaussianBlur",
    "feOffset",
    "feBlend",
    "feColorMatrix",
    "linearGradient",
    "radialGradient",
    "stop",
    "animate",
    "animateTransform",
    "math",
    "mi",
    "mn",
    "mo",
    "mspace",
];

/// Elements that may not appear anywhere inside another instance of
/// themselves.
pub(crate) const NON_RECURSABLE: &[&str] = &[
    "html", "head", "body", "video", "audio", "noscript", "form", "a", "button", "label",
];

/// § 13.1.2.4 Optional tags: an open element (key) is implicitly closed when
/// one of the listed start tags appears directly inside it.
pub(crate) const IMPLIED_END_TAGS: &[(&str, &[&str])] = &[
    ("li", &["li"]),
    ("dt", &["dt", "dd"]),
    ("dd", &["dt", "dd"]),
    (
        "p",
        &[
            "address",
            "article",
            "aside",
            "blockquote",
            "details",
            "dialog",
            "div",
            "dl",
            "fieldset",
            "figcaption",
            "figure",
            "footer",
            "form",
            "h1",
            "h2",
            "h3",
            "h4",
            "h5",
            "h6",
            "header",
            "hgroup",
            "main",
            "menu",
            "nav",
            "ol",
            "p",
            "pre",
            "search",
            "section",
            "table",
            "ul",
        ],
    ),
    ("rt", &["rt", "rp"]),
    ("rp", &["rt", "rp"]),
    ("optgroup", &["optgroup"]),
    ("option", &["option", "optgroup"]),
    ("colgroup", &["colgroup", "thead", "tbody", "tfoot", "tr"]),
    ("caption", &["colgroup", "thead", "tbody", "tfoot", "tr"]),
    ("thead", &["tbody", "tfoot"]),
    ("tbody", &["tbody", "tfoot"]),
    ("tfoot", &["tbody"]),
    ("tr", &["tr", "tbody", "tfoot"]),
    ("td", &["td", "th", "tr", "tbody", "tfoot"]),
    ("th", &["td", "th", "tr", "tbody", "tfoot"]),
];

/// § 13.1.2.4 Optional tags: an open element (key) whose end tag may be
/// omitted when the end tag of one of the listed ancestors arrives.
pub(crate) const CLOSED_BY_PARENT: &[(&str, &[&str])] = &[
    ("head", &["html"]),
    ("body", &["html"]),
    ("li", &["ul", "ol", "menu"]),
    ("dt", &["dl"]),
    ("dd", &["dl"]),
    (
        "p",
        &[
            "article",
            "aside",
            "blockquote",
            "body",
            "dd",
            "details",
            "dialog",
            "div",
            "fieldset",
            "figcaption",
            "figure",
            "footer",
            "form",
            "header",
            "li",
            "main",
            "nav",
            "search",
            "section",
            "td",
            "th",
            "ol",
            "ul",
            "menu",
            "object",
            "template",
        ],
    ),
    ("rt", &["ruby"]),
    ("rp", &["ruby"]),
    ("optgroup", &["select"]),
    ("option", &["select", "datalist", "optgroup"]),
    ("colgroup", &["table"]),
    ("thead", &["table"]),
    ("tbody", &["table"]),
    ("tfoot", &["table"]),
    ("tr", &["table", "thead", "tbody", "tfoot"]),
    ("td", &["tr", "table", "thead", "tbody", "tfoot"]),
    ("th", &["tr", "table", "thead", "tbody", "tfoot"]),
];

/// § 3.2.6 Global attributes, plus the event handler content attributes
/// that apply to every HTML element.
pub(crate) const GLOBAL_ATTRIBUTES: &[&str] = &[
    // Any namespace
    "class",
    "id",
    "slot",
    // HTML elements
    "accesskey",
    "autocapitalize",
    "autofocus",
    "contenteditable",
    "dir",
    "draggable",
    "enterkeyhint",
    "hidden",
    "inert",
    "inputmode",
    "is",
    "itemid",
    "itemprop",
    "itemref",
    "itemscope",
    "itemtype",
    "lang",
    "nonce",
    "popover",
    "spellcheck",
    "style",
    "tabindex",
    "title",
    "translate",
    "role",
    // Event handlers
    "onabort",
    "onauxclick",
    "onblur",
    "oncancel",
    "oncanplay",
    "oncanplaythrough",
    "onchange",
    "onclick",
    "onclose",
    "oncontextmenu",
    "oncopy",
    "oncuechange",
    "oncut",
    "ondblclick",
    "ondrag",
    "ondragend",
    "ondragenter",
    "ondragexit",
    "ondragleave",
    "ondragover",
    "ondragstart",
    "ondrop",
    "ondurationchange",
    "onemptied",
    "onended",
    "onerror",
    "onfocus",
    "onformdata",
    "oninput",
    "oninvalid",
    "onkeydown",
    "onkeypress",
    "onkeyup",
    "onload",
    "onloadeddata",
    "onloadedmetadata",
    "onloadend",
    "onloadstart",
    "onmousedown",
    "onmouseenter",
    "onmouseleave",
    "onmousemove",
    "onmouseout",
    "onmouseover",
    "onmouseup",
    "onpaste",
    "onpause",
    "onplay",
    "onplaying",
    "onprogress",
    "onratechange",
    "onreset",
    "onresize",
    "onscroll",
    "onsecuritypolicyviolation",
    "onseeked",
    "onseeking",
    "onselect",
    "onstalled",
    "onsubmit",
    "onsuspend",
    "ontimeupdate",
    "ontoggle",
    "onvolumechange",
    "onwaiting",
    "onwheel",
];

/// Attribute name prefixes accepted on every element.
pub(crate) const GLOBAL_ATTRIBUTE_PREFIXES: &[&str] = &["aria-"];

/// Element-specific attributes, on top of [`GLOBAL_ATTRIBUTES`].
pub(crate) const ELEMENT_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("html", &["manifest", "xmlns"]), // § 4.1.1
    ("base", &["href", "target"]),    // § 4.2.3
    (
        "link",
        &[
            "href",
            "crossorigin",
            "rel",
            "media",
            "integrity",
            "hreflang",
            "type",
            "referrerpolicy",
            "sizes",
            "imagesrcset",
            "imagesizes",
            "as",
            "color",
            "blocking",
            "fetchpriority",
            "disabled",
        ],
    ), // § 4.2.4
    ("meta", &["name", "http-equiv", "content", "charset", "media"]), // § 4.2.5
    ("style", &["media", "blocking"]), // § 4.2.6
    ("body", &[
        "onafterprint",
        "onbeforeprint",
        "onbeforeunload",
        "onhashchange",
        "onlanguagechange",
        "onmessage",
        "onmessageerror",
        "onoffline",
        "ononline",
        "onpagehide",
        "onpageshow",
        "onpopstate",
        "onrejectionhandled",
        "onstorage",
        "onunhandledrejection",
        "onunload",
    ]), // § 4.3.1
    ("blockquote", &["cite"]),
    ("ol", &["reversed", "start", "type"]), // § 4.4.5
    ("li", &["value"]),                     // § 4.4.8
    (
        "a",
        &[
            "href",
            "target",
            "download",
            "ping",
            "rel",
            "hreflang",
            "type",
            "referrerpolicy",
        ],
    ), // § 4.5.1
    ("q", &["cite"]),         // § 4.5.7
    ("data", &["value"]),     // § 4.5.13
    ("time", &["datetime"]),  // § 4.5.14
    ("ins", &["cite", "datetime"]),
    ("del", &["cite", "datetime"]),
    (
        "img",
        &[
            "alt",
            "src",
            "srcset",
            "sizes",
            "crossorigin",
            "usemap",
            "ismap",
            "width",
            "height",
            "referrerpolicy",
            "decoding",
            "loading",
            "fetchpriority",
        ],
    ), // § 4.8.3
    (
        "iframe",
        &[
            "src",
            "srcdoc",
            "name",
            "sandbox",
            "allow",
            "allowfullscreen",
            "width",
            "height",
            "referrerpolicy",
            "loading",
        ],
    ), // § 4.8.5
    ("embed", &["src", "type", "width", "height"]), // § 4.8.6
    ("object", &["data", "type", "name", "usemap", "form", "width", "height"]), // § 4.8.7
    ("param", &["name", "value"]), // § 4.8.8
    (
        "video",
        &[
            "src",
            "crossorigin",
            "poster",
            "preload",
            "autoplay",
            "playsinline",
            "loop",
            "muted",
            "controls",
            "width",
            "height",
        ],
    ), // § 4.8.9
    (
        "audio",
        &["src", "crossorigin", "preload", "autoplay", "loop", "muted", "controls"],
    ), // § 4.8.10
    ("source", &["src", "type", "srcset", "sizes", "media", "width", "height"]),
    ("track", &["kind", "src", "srclang", "label", "default"]), // § 4.8.11
    ("map", &["name"]), // § 4.8.13
    (
        "area",
        &[
            "alt",
            "coords",
            "shape",
            "href",
            "target",
            "download",
            "ping",
            "rel",
            "referrerpolicy",
        ],
    ), // § 4.8.14
    ("colgroup", &["span"]), // § 4.9.3
    ("col", &["span"]),      // § 4.9.4
    ("td", &["colspan", "rowspan", "headers"]), // § 4.9.9
    ("th", &["colspan", "rowspan", "headers", "scope", "abbr"]), // § 4.9.10
    (
        "form",
        &[
            "accept-charset",
            "action",
            "autocomplete",
            "enctype",
            "method",
            "name",
            "novalidate",
            "target",
            "rel",
        ],
    ), // § 4.10.3
    ("label", &["for"]), // § 4.10.4
    (
        "input",
        &[
            "accept",
            "alt",
            "autocomplete",
            "checked",
            "dirname",
            "disabled",
            "form",
            "formaction",
            "formenctype",
            "formmethod",
            "formnovalidate",
            "formtarget",
            "height",
            "list",
            "max",
            "maxlength",
            "min",
            "minlength",
            "multiple",
            "name",
            "pattern",
            "placeholder",
            "readonly",
            "required",
            "size",
            "src",
            "step",
            "type",
            "value",
            "width",
        ],
    ), // § 4.10.5
    (
        "button",
        &[
            "disabled",
            "form",
            "formaction",
            "formenctype",
            "formmethod",
            "formnovalidate",
            "formtarget",
            "name",
            "popovertarget",
            "popovertargetaction",
            "type",
            "value",
        ],
    ), // § 4.10.6
    (
        "select",
        &["autocomplete", "disabled", "form", "multiple", "name", "required", "size"],
    ), // § 4.10.7
    ("optgroup", &["disabled", "label"]), // § 4.10.9
    ("option", &["disabled", "label", "selected", "value"]), // § 4.10.10
    (
        "textarea",
        &[
            "autocomplete",
            "cols",
            "dirname",
            "disabled",
            "form",
            "maxlength",
            "minlength",
            "name",
            "placeholder",
            "readonly",
            "required",
            "rows",
            "wrap",
        ],
    ), // § 4.10.11
    ("output", &["for", "form", "name"]), // § 4.10.12
    ("progress", &["value", "max"]),      // § 4.10.13
    ("meter", &["value", "min", "max", "low", "high", "optimum"]), // § 4.10.14
    ("fieldset", &["disabled", "form", "name"]), // § 4.10.15
    ("details", &["open", "name"]), // § 4.11.1
    ("dialog", &["open"]),          // § 4.11.4
    (
        "script",
        &[
            "src",
            "type",
            "nomodule",
            "async",
            "defer",
            "crossorigin",
            "integrity",
            "referrerpolicy",
            "blocking",
            "fetchpriority",
        ],
    ), // § 4.12.1
    ("template", &["shadowrootmode"]), // § 4.12.3
    ("slot", &["name"]),               // § 4.12.4
    ("canvas", &["width", "height"]),  // § 4.12.5
    ("svg", &["xmlns", "viewbox", "width", "height", "preserveaspectratio", "version"]),
    ("math", &["xmlns", "display"]),
];

/// § 16 Obsolete features: accepted with a warning.
pub(crate) const DEPRECATED_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("html", &["xml:lang", "prefix", "version"]),
    ("script", &["charset", "language"]),
    ("img", &["border", "align", "hspace", "vspace", "longdesc"]),
    ("style", &["type"]),
    ("a", &["name", "charset", "coords", "shape", "rev"]),
    ("table", &["border", "cellpadding", "cellspacing", "width", "align", "bgcolor", "summary"]),
    ("td", &["align", "valign", "width", "bgcolor", "nowrap"]),
    ("th", &["align", "valign", "width", "bgcolor", "nowrap"]),
    ("tr", &["align", "valign", "bgcolor"]),
    ("body", &["bgcolor", "background", "text", "link", "vlink", "alink"]),
    ("iframe", &["frameborder", "scrolling", "marginwidth", "marginheight"]),
    ("br", &["clear"]),
    ("hr", &["align", "noshade", "size", "width"]),
];
