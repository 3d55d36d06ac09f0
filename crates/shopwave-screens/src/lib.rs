//! Screen state for the ShopWave storefront.
//!
//! Each screen is a plain struct. User actions are method calls, and the
//! collaborators a screen needs (product provider, wishlist, auth provider,
//! navigator) are passed in by reference:
//!
//! ```text
//! HomeScreen           banners, sections, flash deal
//! SearchScreen         text search + category chips
//! CategoryScreen       one category, sortable
//! LoginScreen          ┐
//! RegisterScreen       ├ forms over an AuthProvider
//! ForgotPasswordScreen ┘
//! OrderSuccessScreen   order confirmation
//! ```
//!
//! Failed collaborator calls surface as an [`Alert`] on the screen.

pub mod alert;
pub mod auth;
pub mod category;
pub mod favorites;
pub mod home;
pub mod navigation;
pub mod order_success;
pub mod search;
pub mod view;

pub use alert::Alert;
pub use auth::{ForgotPasswordScreen, LoginScreen, RegisterScreen};
pub use category::CategoryScreen;
pub use favorites::toggle_favorite;
pub use home::HomeScreen;
pub use navigation::{HomeSection, NavEvent, Navigator, RecordingNavigator, Route};
pub use order_success::OrderSuccessScreen;
pub use search::SearchScreen;
pub use view::ListingView;
