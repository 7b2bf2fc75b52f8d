mod input;
mod output;

pub(crate) use input::InputContext;
pub(crate) use output::{ObjectTypeBuilder, OutputContext};
