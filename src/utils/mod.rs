pub mod paths;
pub mod props;
