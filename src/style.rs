//! CSS classes attached to emitted elements.
//!
//! The default theme is the dark Tailwind look of the live preview pane.
//! An empty class string means the element is written without a `class`
//! attribute.

/// Class strings for every element the renderer can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub h1: &'static str,
    pub h2: &'static str,
    pub h3: &'static str,
    pub unordered_list: &'static str,
    pub ordered_list: &'static str,
    pub list_item: &'static str,
    pub blockquote: &'static str,
    pub paragraph: &'static str,

    pub strong: &'static str,
    pub emphasis: &'static str,
    pub inline_code: &'static str,

    /// Wrapper around a code block and its language label.
    pub code_frame: &'static str,
    pub code_label: &'static str,
    pub code_pre: &'static str,
    pub code_block: &'static str,

    pub references: &'static str,
    pub references_heading: &'static str,
    pub references_list: &'static str,
    pub reference_link: &'static str,

    /// Blinking cursor appended while a stream is still running.
    pub typing_cursor: &'static str,
}

impl Theme {
    /// Dark Tailwind classes.
    pub const fn styled() -> Self {
        Self {
            h1: "text-3xl font-bold mt-8 mb-4 border-b border-gray-700 pb-2",
            h2: "text-2xl font-semibold mt-6 mb-3 text-indigo-400",
            h3: "text-xl font-medium mt-4 mb-2 text-gray-200",
            unordered_list: "list-disc ml-6 space-y-2 my-4 text-gray-300",
            ordered_list: "list-decimal ml-6 space-y-2 my-4 text-gray-300",
            list_item: "",
            blockquote: "border-l-4 border-indigo-500 pl-4 py-2 my-4 italic text-gray-400 bg-gray-800/30 rounded-r-lg",
            paragraph: "my-4 leading-relaxed text-gray-300",
            strong: "text-indigo-300",
            emphasis: "text-gray-400",
            inline_code: "bg-gray-800 text-indigo-200 px-1.5 py-0.5 rounded font-mono text-sm border border-gray-700",
            code_frame: "relative my-6",
            code_label: "absolute top-0 right-0 bg-gray-700 text-gray-400 text-[10px] px-2 py-1 rounded-bl-md uppercase font-bold",
            code_pre: "bg-[#0d1117] p-4 rounded-xl overflow-x-auto border border-gray-800 shadow-inner",
            code_block: "text-blue-300 font-mono text-sm",
            references: "mt-12 pt-8 border-t border-gray-700",
            references_heading: "text-lg font-semibold text-gray-400 mb-4 flex items-center gap-2",
            references_list: "space-y-2",
            reference_link: "text-indigo-400 hover:underline text-sm",
            typing_cursor: "typing-cursor",
        }
    }

    /// No classes at all; bare semantic tags.
    pub const fn plain() -> Self {
        Self {
            h1: "",
            h2: "",
            h3: "",
            unordered_list: "",
            ordered_list: "",
            list_item: "",
            blockquote: "",
            paragraph: "",
            strong: "",
            emphasis: "",
            inline_code: "",
            code_frame: "",
            code_label: "",
            code_pre: "",
            code_block: "",
            references: "",
            references_heading: "",
            references_list: "",
            reference_link: "",
            typing_cursor: "typing-cursor",
        }
    }

    /// Heading class by level. Levels above 3 never reach the renderer.
    pub fn heading(&self, level: u8) -> &'static str {
        match level {
            1 => self.h1,
            2 => self.h2,
            _ => self.h3,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::styled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_classes_differ_by_level() {
        let theme = Theme::styled();
        assert_ne!(theme.heading(1), theme.heading(2));
        assert_ne!(theme.heading(2), theme.heading(3));
        assert_ne!(theme.heading(1), theme.heading(3));
    }

    #[test]
    fn test_default_is_styled() {
        assert_eq!(Theme::default(), Theme::styled());
    }

    #[test]
    fn test_plain_keeps_cursor_class() {
        let theme = Theme::plain();
        assert!(theme.paragraph.is_empty());
        assert_eq!(theme.typing_cursor, "typing-cursor");
    }
}
