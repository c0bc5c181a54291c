// tests/shape_contract_tests.rs - Shape contract for every duplex variant.

use burn::tensor::{Distribution, Tensor};
use burn_ndarray::NdArray;
use duplex_net::{BidirectionalModel, DuplexModel, DuplexModelConfig, ModelVariant};

type TestBackend = NdArray<f32>;

const ALL_VARIANTS: [ModelVariant; 4] = [
    ModelVariant::SingleFeedForward,
    ModelVariant::DualFeedForward,
    ModelVariant::DualRecurrent,
    ModelVariant::DualAttention,
];

fn sample_batch(
    batch: usize,
    input_size: usize,
    output_size: usize,
) -> (Tensor<TestBackend, 2>, Tensor<TestBackend, 2>) {
    let device = Default::default();
    let input = Tensor::random([batch, input_size], Distribution::Uniform(-1.0, 1.0), &device);
    let output = Tensor::random([batch, output_size], Distribution::Uniform(-1.0, 1.0), &device);
    (input, output)
}

#[test]
fn test_all_variants_preserve_batch_and_domain_shapes() {
    let device = Default::default();
    let config = DuplexModelConfig::new(4, 3, 8);

    for variant in ALL_VARIANTS {
        let model = DuplexModel::<TestBackend>::new(variant, &config, &device);
        let (input, output) = sample_batch(7, 4, 3);

        let (predicted_input, predicted_output) = model.forward(input, output);
        assert_eq!(
            predicted_input.dims(),
            [7, 4],
            "{}: predicted input shape",
            variant.as_str()
        );
        assert_eq!(
            predicted_output.dims(),
            [7, 3],
            "{}: predicted output shape",
            variant.as_str()
        );
    }
}

#[test]
fn test_batch_size_one() {
    let device = Default::default();
    let config = DuplexModelConfig::new(4, 3, 8);

    for variant in ALL_VARIANTS {
        let model = DuplexModel::<TestBackend>::new(variant, &config, &device);
        let (input, output) = sample_batch(1, 4, 3);

        let (predicted_input, predicted_output) = model.forward(input, output);
        assert_eq!(predicted_input.dims(), [1, 4]);
        assert_eq!(predicted_output.dims(), [1, 3]);
    }
}

#[test]
#[should_panic]
fn test_input_width_mismatch_panics() {
    let device = Default::default();
    let config = DuplexModelConfig::new(4, 3, 8);
    let model =
        DuplexModel::<TestBackend>::new(ModelVariant::DualFeedForward, &config, &device);

    // Input width 5 against a configured input size of 4.
    let (input, output) = sample_batch(2, 5, 3);
    let _ = model.forward(input, output);
}

#[test]
#[should_panic]
fn test_output_width_mismatch_panics() {
    let device = Default::default();
    let config = DuplexModelConfig::new(4, 3, 8);
    let model =
        DuplexModel::<TestBackend>::new(ModelVariant::DualFeedForward, &config, &device);

    // Output width 6 against a configured output size of 3.
    let (input, output) = sample_batch(2, 4, 6);
    let _ = model.forward(input, output);
}

#[test]
#[should_panic]
fn test_recurrent_input_width_mismatch_panics() {
    let device = Default::default();
    let config = DuplexModelConfig::new(4, 3, 8);
    let model = DuplexModel::<TestBackend>::new(ModelVariant::DualRecurrent, &config, &device);

    // Input width 5 against a configured input size of 4; the first LSTM
    // gate matmul fails.
    let (input, output) = sample_batch(2, 5, 3);
    let _ = model.forward(input, output);
}

#[test]
#[should_panic]
fn test_attention_output_width_mismatch_panics() {
    let device = Default::default();
    let config = DuplexModelConfig::new(4, 3, 8);
    let model = DuplexModel::<TestBackend>::new(ModelVariant::DualAttention, &config, &device);

    // Output width 6 against a configured output size of 3; the reverse
    // stack's input projection fails.
    let (input, output) = sample_batch(2, 4, 6);
    let _ = model.forward(input, output);
}

#[test]
#[should_panic]
fn test_attention_head_count_must_divide_hidden_size() {
    let device = Default::default();
    // 10 is not divisible by 4; the attention reshape fails.
    let config = DuplexModelConfig::new(4, 3, 10).with_num_attn_heads(4);
    let model = DuplexModel::<TestBackend>::new(ModelVariant::DualAttention, &config, &device);

    let (input, output) = sample_batch(2, 4, 3);
    let _ = model.forward(input, output);
}
