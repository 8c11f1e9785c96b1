//! The renderable view tree.
//!
//! `Node` is pure data: components build trees, the overlay registry stores
//! them, and the host renderer walks them. There is no layout or paint logic
//! here — measurement results flow back in through
//! [`crate::geometry::MeasuredGeometry`].

use crate::style::Style;

/// Content alignment on the main axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
}

/// Content alignment on the cross axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
    #[default]
    Stretch,
}

/// Layout properties for a container node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub padding: f32,
    pub gap: f32,
    pub justify: Justify,
    pub align: Align,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn padding(mut self, value: f32) -> Self {
        self.padding = value;
        self
    }

    pub fn gap(mut self, value: f32) -> Self {
        self.gap = value;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// A node in the view tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Node {
    /// Renders nothing.
    #[default]
    Empty,

    /// Text content.
    Text { content: String, style: Style },

    /// Container with vertical layout.
    Column {
        children: Vec<Node>,
        style: Style,
        layout: Layout,
    },

    /// Container with horizontal layout.
    Row {
        children: Vec<Node>,
        style: Style,
        layout: Layout,
    },

    /// Z-axis layering; later children paint above earlier ones.
    Stack { children: Vec<Node>, style: Style },
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            style: Style::default(),
        }
    }

    pub fn column(children: Vec<Node>) -> Self {
        Self::Column {
            children,
            style: Style::default(),
            layout: Layout::default(),
        }
    }

    pub fn row(children: Vec<Node>) -> Self {
        Self::Row {
            children,
            style: Style::default(),
            layout: Layout::default(),
        }
    }

    pub fn stack(children: Vec<Node>) -> Self {
        Self::Stack {
            children,
            style: Style::default(),
        }
    }

    /// Replace the node's style. No effect on `Empty`.
    pub fn styled(mut self, new_style: Style) -> Self {
        match &mut self {
            Self::Empty => {}
            Self::Text { style, .. }
            | Self::Column { style, .. }
            | Self::Row { style, .. }
            | Self::Stack { style, .. } => *style = new_style,
        }
        self
    }

    /// Replace a container's layout. No effect on non-containers.
    pub fn with_layout(mut self, new_layout: Layout) -> Self {
        match &mut self {
            Self::Column { layout, .. } | Self::Row { layout, .. } => *layout = new_layout,
            _ => {}
        }
        self
    }

    /// Append a child to a container node. No effect on leaves.
    pub fn child(mut self, node: Node) -> Self {
        match &mut self {
            Self::Column { children, .. }
            | Self::Row { children, .. }
            | Self::Stack { children, .. } => children.push(node),
            _ => {}
        }
        self
    }

    pub fn style(&self) -> Option<&Style> {
        match self {
            Self::Empty => None,
            Self::Text { style, .. }
            | Self::Column { style, .. }
            | Self::Row { style, .. }
            | Self::Stack { style, .. } => Some(style),
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Self::Column { children, .. }
            | Self::Row { children, .. }
            | Self::Stack { children, .. } => children,
            _ => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Node::text(content)
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Node::text(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_appends_to_containers_only() {
        let col = Node::column(vec![]).child(Node::text("a")).child(Node::text("b"));
        assert_eq!(col.children().len(), 2);

        let leaf = Node::text("x").child(Node::text("ignored"));
        assert!(leaf.children().is_empty());
    }

    #[test]
    fn styled_leaves_empty_untouched() {
        let node = Node::Empty.styled(Style::new().opacity(0.5));
        assert!(node.style().is_none());
    }
}
