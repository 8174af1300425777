pub mod hs256;

pub use hs256::Hs256TokenSigner;
