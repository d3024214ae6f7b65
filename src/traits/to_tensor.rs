use burn::tensor::{backend::Backend, Data, Shape, Tensor};

/// A trait for converting items to tensors
///
/// Implemented for state slices, which become a batch of one row so they can be fed straight into a
/// [`Linear`](burn::nn::Linear) stack
pub trait ToTensor<B: Backend, const D: usize> {
    fn to_tensor(self, device: &B::Device) -> Tensor<B, D>;
}

impl<B: Backend> ToTensor<B, 2> for &[f32] {
    fn to_tensor(self, device: &B::Device) -> Tensor<B, 2> {
        let data = Data::new(self.to_vec(), Shape::new([1, self.len()]));
        Tensor::from_floats(data, device)
    }
}

/// Flatten a single-row output tensor back into a plain vector
pub(crate) fn to_vec<B: Backend>(tensor: Tensor<B, 2>) -> Vec<f32> {
    tensor.into_data().convert::<f32>().value
}

#[cfg(test)]
mod tests {
    use burn::backend::NdArray;

    use super::*;

    #[test]
    fn slice_to_row_tensor() {
        let device = Default::default();
        let state = [1.0, 2.0, 3.0];
        let tensor: Tensor<NdArray, 2> = state.as_slice().to_tensor(&device);
        assert_eq!(tensor.dims(), [1, 3]);
        assert_eq!(to_vec(tensor), state);
    }
}
