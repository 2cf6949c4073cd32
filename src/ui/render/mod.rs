mod all;
mod board;
mod create_post;
mod footer;
mod header;
mod log;
mod post_detail;

use self::log::log;
use super::*;
use board::board;
use create_post::create_post;
use footer::footer;
use header::header;
use post_detail::post_detail;

pub use all::all as render;
