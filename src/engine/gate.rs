//! engine::gate
//!
//! Role gating for blog actions.
//!
//! # Architecture
//!
//! Every engine operation names the [`Action`] it performs and asks
//! [`authorize`] for a [`Decision`] before touching the repository. The
//! decision depends only on the signed-in account and the action, so the
//! same inputs always gate the same way.
//!
//! | Action                                   | Allowed for                        |
//! |------------------------------------------|------------------------------------|
//! | `ListPosts`, `ViewPost`                  | any signed-in account              |
//! | `CreatePost`, `ViewOwnPosts`             | instructors                        |
//! | `ManageOwnPosts`                         | instructors                        |
//! | `ManageInstructors`, `ManageStudents`    | instructors                        |
//! | `EditPost`, `DeletePost`                 | the instructor who wrote the post  |
//!
//! # Invariants
//!
//! - Without an account every action is denied
//! - Post ownership is decided by email alone
//!
//! # Example
//!
//! ```
//! use classblog::engine::gate::{authorize, Action, Decision};
//!
//! assert!(!authorize(None, &Action::ListPosts).is_allowed());
//! ```

use crate::core::model::Account;

/// Something a signed-in user may attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ListPosts,
    ViewPost,
    CreatePost,
    EditPost { author_email: String },
    DeletePost { author_email: String },
    ViewOwnPosts,
    /// Role check run before a post is looked up for an edit or delete.
    ManageOwnPosts,
    ManageInstructors,
    ManageStudents,
}

impl Action {
    /// Short description used in denial messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Action::ListPosts => "list posts",
            Action::ViewPost => "view posts",
            Action::CreatePost => "create posts",
            Action::EditPost { .. } => "edit this post",
            Action::DeletePost { .. } => "delete this post",
            Action::ViewOwnPosts => "list own posts",
            Action::ManageOwnPosts => "edit or delete posts",
            Action::ManageInstructors => "manage instructors",
            Action::ManageStudents => "manage students",
        }
    }
}

/// Outcome of a gating check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// Denied, with the reason shown to the user.
    Deny(String),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Decide whether `account` may perform `action`.
pub fn authorize(account: Option<&Account>, action: &Action) -> Decision {
    let Some(account) = account else {
        return Decision::Deny(format!("sign in to {}", action.describe()));
    };

    match action {
        Action::ListPosts | Action::ViewPost => Decision::Allow,

        Action::CreatePost
        | Action::ViewOwnPosts
        | Action::ManageOwnPosts
        | Action::ManageInstructors
        | Action::ManageStudents => {
            if account.is_instructor() {
                Decision::Allow
            } else {
                Decision::Deny(format!("only instructors can {}", action.describe()))
            }
        }

        Action::EditPost { author_email } | Action::DeletePost { author_email } => {
            if !account.is_instructor() {
                Decision::Deny(format!("only instructors can {}", action.describe()))
            } else if account.email != *author_email {
                Decision::Deny(format!(
                    "only the author ({}) can {}",
                    author_email,
                    action.describe()
                ))
            } else {
                Decision::Allow
            }
        }
    }
}
