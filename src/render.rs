//! Render Utilities
//!
//! Projects the filtered list into plain view data. Rebuilt from scratch
//! on every call; components draw directly from the result.

use crate::models::Item;

/// One visible row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// Completed rows cannot be edited
    pub editable: bool,
}

impl RowView {
    pub fn title_class(&self) -> &'static str {
        if self.completed {
            "todo-title completed"
        } else {
            "todo-title"
        }
    }
}

/// Whole list presentation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    pub rows: Vec<RowView>,
    pub items_left: String,
}

/// "1 item left" / "N items left"
pub fn items_left_label(count: usize) -> String {
    format!("{} item{} left", count, if count == 1 { "" } else { "s" })
}

pub fn render(items: &[&Item], remaining: usize) -> ListView {
    let rows = items
        .iter()
        .map(|item| RowView {
            id: item.id.clone(),
            text: item.text.clone(),
            completed: item.completed,
            editable: !item.completed,
        })
        .collect();

    ListView {
        rows,
        items_left: items_left_label(remaining),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_left_label() {
        assert_eq!(items_left_label(0), "0 items left");
        assert_eq!(items_left_label(1), "1 item left");
        assert_eq!(items_left_label(7), "7 items left");
    }

    #[test]
    fn test_render_rows() {
        let open = Item::new("a".into(), "Buy milk".into(), 0);
        let mut done = Item::new("b".into(), "Walk dog".into(), 1);
        done.completed = true;

        let view = render(&[&done, &open], 1);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].id, "b");
        assert!(!view.rows[0].editable);
        assert_eq!(view.rows[0].title_class(), "todo-title completed");
        assert!(view.rows[1].editable);
        assert_eq!(view.rows[1].title_class(), "todo-title");
        assert_eq!(view.items_left, "1 item left");
    }

    #[test]
    fn test_render_empty() {
        let view = render(&[], 0);
        assert!(view.rows.is_empty());
        assert_eq!(view.items_left, "0 items left");
    }
}
