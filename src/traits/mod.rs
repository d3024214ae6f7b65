mod to_tensor;

pub(crate) use to_tensor::to_vec;
pub use to_tensor::ToTensor;
