use criterion::{BenchmarkGroup, Throughput, measurement::WallTime};

#[path = "../../tests/common/input.rs"]
mod input;

/// Short-path sizes, both sides of the 96-byte block, then bulk.
const SIZES: [usize; 16] = [0, 1, 8, 15, 16, 31, 32, 64, 95, 96, 97, 192, 1024, 4 * 1024, 64 * 1024, 1024 * 1024];

pub fn sized_inputs() -> Vec<(usize, Vec<u8>)> {
  SIZES.into_iter().map(|len| (len, input::gen_bytes(len, 0xD1CE_B00C_D15C_0FFE))).collect()
}

/// Bytes per second, or calls per second for the empty message.
pub fn set_throughput(group: &mut BenchmarkGroup<'_, WallTime>, len: usize) {
  group.throughput(match len {
    0 => Throughput::Elements(1),
    n => Throughput::Bytes(n as u64),
  });
}
