// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to inform users about actions (copy
//! success, selection limit, etc.) without blocking interaction.
//!
//! - Toast duration: ~3s for success/info, ~5s for warnings, manual
//!   dismiss for errors
//! - Max visible toasts: 3 (others are queued)
//! - Position: bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, Severity};
pub use toast::Toast;
