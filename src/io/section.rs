use core::fmt::Write;

/// The root element of every ENVI-met data file.
pub const ROOT_ELEMENT: &str = "ENVI-MET_Datafile";

/// The attributes carried by every tag of a [`Section`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeMode {
    /// Scalar values, no attribute.
    None,
    /// Dense 2D matrices of `i × j` cells.
    Matrix2d {
        /// Number of cells along X.
        i: usize,
        /// Number of cells along Y.
        j: usize,
    },
    /// Sparse 3D matrices of `i × j × k` cells.
    Matrix3d {
        /// Number of cells along X.
        i: usize,
        /// Number of cells along Y.
        j: usize,
        /// Number of layers.
        k: usize,
        /// Value of the cells absent from the matrix.
        default: String,
    },
}

/// A titled group of tags of an ENVI-met data file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    title: String,
    tags: Vec<String>,
    values: Vec<String>,
    attributes: AttributeMode,
}

impl Section {
    /// Creates an empty section.
    pub fn new(title: impl Into<String>, attributes: AttributeMode) -> Self {
        Section {
            title: title.into(),
            tags: vec![],
            values: vec![],
            attributes,
        }
    }

    /// Appends a tag to this section.
    pub fn with(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self.values.push(value.into());
        self
    }

    /// The title of this section.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The value of `tag`, if this section has it.
    pub fn value(&self, tag: &str) -> Option<&str> {
        self.tags
            .iter()
            .position(|t| t == tag)
            .map(|id| self.values[id].as_str())
    }

    /// The attributes of the tags of this section.
    pub fn attributes(&self) -> &AttributeMode {
        &self.attributes
    }

    /// Appends the markup of this section to `out`.
    pub fn write_to(&self, out: &mut String) {
        let _ = write!(out, "<{}>\n ", self.title);

        for (tag, value) in self.tags.iter().zip(&self.values) {
            let _ = write!(out, "<{tag}");
            match &self.attributes {
                AttributeMode::None => {}
                AttributeMode::Matrix2d { i, j } => {
                    let _ = write!(out, " type=\"matrix-data\" dataI=\"{i}\" dataJ=\"{j}\"");
                }
                AttributeMode::Matrix3d { i, j, k, default } => {
                    let _ = write!(
                        out,
                        " type=\"sparematrix-3D\" dataI=\"{i}\" dataJ=\"{j}\" zlayers=\"{k}\" defaultValue=\""
                    );
                    escape_into(out, default, true);
                    out.push('"');
                }
            }
            out.push('>');
            escape_into(out, value, false);
            let _ = write!(out, "</{tag}>\n ");
        }

        let _ = writeln!(out, "</{}>", self.title);
    }
}

/// Renders a whole data file made of the given sections.
pub fn render_document(sections: &[Section]) -> String {
    let mut out = format!("<{ROOT_ELEMENT}>\n ");
    for section in sections {
        section.write_to(&mut out);
    }
    let _ = write!(out, "</{ROOT_ELEMENT}>");
    out
}

/// Appends `text` to `out`, escaping the markup characters.
pub fn escape_into(out: &mut String, text: &str, attribute: bool) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Reverts [`escape_into`].
pub fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}
