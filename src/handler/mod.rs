//! 登録ハンドラの表現（分割モジュール）

pub mod builders;
pub mod core;
pub mod descriptor;
pub mod spec;

pub use builders::{delete, get, head, method_pattern, options, patch, path_pattern, post, put};
pub use self::core::{RequestHandler, RestHandler};
pub use descriptor::{describe, HandlerDescriptor};
pub use spec::{MethodSpec, PathSpec};
