pub mod evonet;

pub use self::evonet::Evonet;
