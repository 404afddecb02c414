//! ARIA Support
//!
//! Roles and the `aria-*` properties a modal surface is judged by.

use fos_dom::ElementData;

/// ARIA role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    // Dialogs
    Dialog,
    AlertDialog,

    // Widgets
    Button,
    Checkbox,
    Link,
    Radio,
    Slider,
    SpinButton,
    Switch,
    TextBox,

    // Content
    Heading,
    Paragraph,
    Generic,
}

impl AriaRole {
    /// Parse an explicit `role` value. Unknown roles yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim().to_ascii_lowercase().as_str() {
            "dialog" => Self::Dialog,
            "alertdialog" => Self::AlertDialog,
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "link" => Self::Link,
            "radio" => Self::Radio,
            "slider" => Self::Slider,
            "spinbutton" => Self::SpinButton,
            "switch" => Self::Switch,
            "textbox" => Self::TextBox,
            "heading" => Self::Heading,
            "paragraph" => Self::Paragraph,
            "generic" => Self::Generic,
            _ => return None,
        })
    }

    /// Implicit role of an HTML element
    pub fn implicit(element: &ElementData) -> Option<Self> {
        Some(match element.tag_name() {
            "dialog" => Self::Dialog,
            "button" => Self::Button,
            "a" | "area" if element.has_attr("href") => Self::Link,
            "textarea" => Self::TextBox,
            "input" => match element.get_attr("type").unwrap_or("text") {
                "checkbox" => Self::Checkbox,
                "radio" => Self::Radio,
                "range" => Self::Slider,
                "number" => Self::SpinButton,
                "button" | "submit" | "reset" => Self::Button,
                "hidden" => return None,
                _ => Self::TextBox,
            },
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Self::Heading,
            "p" => Self::Paragraph,
            "div" | "span" => Self::Generic,
            _ => return None,
        })
    }

    /// Interactive roles that need an accessible name
    pub fn is_widget(&self) -> bool {
        matches!(self,
            Self::Button | Self::Checkbox | Self::Link | Self::Radio |
            Self::Slider | Self::SpinButton | Self::Switch | Self::TextBox
        )
    }

    /// Dialog-like roles that can be modal
    pub fn is_dialog(&self) -> bool {
        matches!(self, Self::Dialog | Self::AlertDialog)
    }

    /// Roles whose name may come from their own content
    pub fn name_from_content(&self) -> bool {
        matches!(self,
            Self::Button | Self::Link | Self::Heading |
            Self::Checkbox | Self::Radio | Self::Switch
        )
    }
}

/// ARIA attributes on an element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AriaAttributes {
    pub role: Option<AriaRole>,
    label: Option<String>,
    labelled_by: Vec<String>,
    described_by: Vec<String>,
    modal: bool,
    hidden: bool,
}

impl AriaAttributes {
    /// Read `role` (falling back to the implicit role) and the labelling
    /// and modality attributes of an element
    pub fn from_element(element: &ElementData) -> Self {
        let id_list = |name: &str| -> Vec<String> {
            element
                .get_attr(name)
                .map(|v| v.split_whitespace().map(String::from).collect())
                .unwrap_or_default()
        };

        Self {
            role: element
                .get_attr("role")
                .and_then(AriaRole::parse)
                .or_else(|| AriaRole::implicit(element)),
            label: element.get_attr("aria-label").map(String::from),
            labelled_by: id_list("aria-labelledby"),
            described_by: id_list("aria-describedby"),
            modal: element.get_attr("aria-modal") == Some("true"),
            hidden: element.get_attr("aria-hidden") == Some("true"),
        }
    }

    /// `aria-label` value
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// IDs referenced by `aria-labelledby`
    pub fn labelled_by(&self) -> &[String] {
        &self.labelled_by
    }

    /// IDs referenced by `aria-describedby`
    pub fn described_by(&self) -> &[String] {
        &self.described_by
    }

    /// `aria-modal="true"`
    pub fn is_modal(&self) -> bool {
        self.modal
    }

    /// `aria-hidden="true"`
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role() {
        assert_eq!(AriaRole::parse("dialog"), Some(AriaRole::Dialog));
        assert_eq!(AriaRole::parse(" AlertDialog "), Some(AriaRole::AlertDialog));
        assert_eq!(AriaRole::parse("bogus"), None);
        assert!(AriaRole::Button.is_widget());
        assert!(!AriaRole::Heading.is_widget());
        assert!(AriaRole::AlertDialog.is_dialog());
        assert!(AriaRole::Heading.name_from_content());
        assert!(!AriaRole::Dialog.name_from_content());
    }

    #[test]
    fn test_implicit_roles() {
        let mut link = ElementData::new("a");
        assert_eq!(AriaRole::implicit(&link), None);
        link.set_attr("href", "#");
        assert_eq!(AriaRole::implicit(&link), Some(AriaRole::Link));

        let mut input = ElementData::new("input");
        assert_eq!(AriaRole::implicit(&input), Some(AriaRole::TextBox));
        input.set_attr("type", "hidden");
        assert_eq!(AriaRole::implicit(&input), None);

        assert_eq!(AriaRole::implicit(&ElementData::new("h2")), Some(AriaRole::Heading));
        assert_eq!(AriaRole::implicit(&ElementData::new("section")), None);
    }

    #[test]
    fn test_aria_attributes() {
        let mut el = ElementData::new("div");
        el.set_attr("role", "dialog");
        el.set_attr("aria-modal", "true");
        el.set_attr("aria-hidden", "false");
        el.set_attr("aria-labelledby", "title subtitle");
        el.set_attr("aria-describedby", "description");

        let aria = AriaAttributes::from_element(&el);
        assert_eq!(aria.role, Some(AriaRole::Dialog));
        assert!(aria.is_modal());
        assert!(!aria.is_hidden());
        assert_eq!(aria.labelled_by().to_vec(), vec!["title".to_string(), "subtitle".to_string()]);
        assert_eq!(aria.described_by().to_vec(), vec!["description".to_string()]);
        assert_eq!(aria.label(), None);
    }

    #[test]
    fn test_unknown_role_falls_back_to_implicit() {
        let mut el = ElementData::new("button");
        el.set_attr("role", "nonsense");
        el.set_attr("aria-label", "Close");
        el.set_attr("aria-hidden", "true");

        let aria = AriaAttributes::from_element(&el);
        assert_eq!(aria.role, Some(AriaRole::Button));
        assert_eq!(aria.label(), Some("Close"));
        assert!(aria.is_hidden());
        assert!(aria.labelled_by().is_empty());
    }
}
