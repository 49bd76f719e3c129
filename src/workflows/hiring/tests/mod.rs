mod common;
mod routing;
mod transitions;
