use super::permutation_tables::{E, FINAL_PERMUTATION, INITIAL_PERMUTATION, P, PC_1, PC_2};
use super::s_boxes::S;

/// 0b00000000_00000000_00000000_00000000_00001111_11111111_11111111_11111111;
const MASK_RIGHT_28_BIT: u64 = (1u64 << 28) - 1;
/// 0b00000000_11111111_11111111_11111111_11110000_00000000_00000000_00000000;
const MASK_LEFT_28_BIT: u64 = ((1u64 << 56) - 1) ^ MASK_RIGHT_28_BIT;

/// 0b00000000_00000000_00000000_00000000_11111111_11111111_11111111_11111111;
const MASK_RIGHT_32_BIT: u64 = (1u64 << 32) - 1;
/// 0b11111111_11111111_11111111_11111111_00000000_00000000_00000000_00000000;
const MASK_LEFT_32_BIT: u64 = u64::MAX ^ MASK_RIGHT_32_BIT;

/// Data Encryption Standard, single 64-bit block.
///
/// `Des::new` runs the key schedule once; `encrypt`/`decrypt` reuse the
/// resulting sixteen round subkeys and never fail, per the core's
/// contract — validation of key/block material happens at the file I/O
/// boundary, not here.
pub struct Des {
    round_keys: [u64; 16],
}

impl Des {
    /// Implements the key scheduling algorithm (KSA): PC-1, sixteen
    /// rotations of the independent 28-bit C/D halves, PC-2 per round.
    pub fn new(k: u64) -> Self {
        // PC-1 step. Permutate and reduce original key.
        let mut key_56_bit: u64 = permutate(k, &PC_1, 64);

        // Key rotation step. Generate 16 56-bit keys.
        let precompressed_keys: [u64; 16] = core::array::from_fn(|i| {
            key_56_bit = rotate_key(key_56_bit, i);
            key_56_bit
        });

        // PC-2 step. Compress into 48-bit keys.
        let round_keys = core::array::from_fn(|i| permutate(precompressed_keys[i], &PC_2, 56));

        Self { round_keys }
    }

    /// Encrypts a 64-bit block of plaintext, producing 64 bits of ciphertext.
    pub fn encrypt(&self, plain_block: u64) -> u64 {
        self.run_rounds(plain_block, false)
    }

    /// Decrypts a 64-bit block of ciphertext, recovering the plaintext.
    ///
    /// Identical network to `encrypt`, run with the round subkeys in
    /// reverse order.
    pub fn decrypt(&self, cipher_block: u64) -> u64 {
        self.run_rounds(cipher_block, true)
    }

    fn run_rounds(&self, block: u64, reverse: bool) -> u64 {
        let ip_block: u64 = permutate(block, &INITIAL_PERMUTATION, 64);

        let mut left: u64 = (ip_block & MASK_LEFT_32_BIT) >> 32;
        let mut right: u64 = ip_block & MASK_RIGHT_32_BIT;

        // Twist halves and apply f function, walking the subkey schedule
        // forward for encryption or backward for decryption.
        let rounds: [usize; 16] = if reverse {
            core::array::from_fn(|i| 15 - i)
        } else {
            core::array::from_fn(|i| i)
        };

        for i in rounds {
            (left, right) = (right, left ^ apply_f(right, self.round_keys[i]));
        }

        (left, right) = (right, left);

        let merged = merge_halves(left, right, 32);

        permutate(merged, &FINAL_PERMUTATION, 64)
    }
}

/// Applies the DES round function f to a 32-bit half-block
/// using the given round key.
fn apply_f(right: u64, round_key: u64) -> u64 {
    // Expand 32-bit half-block into 48 bits.
    let expanded: u64 = permutate(right, &E, 32);

    // Mix with the round key.
    let keyed: u64 = expanded ^ round_key;

    // Split encrypted block into eight 6-bit chunks.
    let mut chunks: [u64; 8] = split_6bit_chunks(keyed);

    // Substitute each chunk with its 4-bit S-box output.
    for (i, s_box) in S.iter().enumerate() {
        chunks[i] = substitute(chunks[i], s_box);
    }

    let merged_32bit: u64 = merge_4bit_chunks(chunks);

    // Permutate with P to produce the final 32-bit output.
    permutate(merged_32bit, &P, 32)
}

/// Takes bits from the input `k` at positions specified in `permutation_vec`
/// (1-based, as published for DES tables), and writes them sequentially
/// into the output, MSB-first.
fn permutate(k: u64, permutation_vec: &[u8], k_size: u8) -> u64 {
    if k_size < 64 {
        assert!(k < (1u64 << k_size), "k is bigger than declared k_size");
    }

    let mut result: u64 = 0;

    // Lookup an input bit and "push" it to the result number.
    for bit_pos in permutation_vec.iter() {
        let shift = (k_size - bit_pos) as u64;
        let input_bit = (k >> shift) & 1;
        result = (result << 1) | input_bit;
    }

    result
}

/// Rotates 56-bit key `k` by one or two positions depending on the round `r`.
fn rotate_key(k: u64, r: usize) -> u64 {
    assert!(r < 16, "max round is 15 (counting from round0)");
    let rotations = if matches!(r, 0 | 1 | 8 | 15) { 1 } else { 2 };

    // Split key and rotate its parts.
    let left: u64 = rotate_left((k & MASK_LEFT_28_BIT) >> 28, rotations);
    let right: u64 = rotate_left(k & MASK_RIGHT_28_BIT, rotations);

    // Merge back into 56-bit key.
    merge_halves(left, right, 28)
}

/// Rotates left 28-bit value `n` times.
fn rotate_left(k: u64, n: usize) -> u64 {
    assert!(k < (1u64 << 28), "key must fit in 28 bits");

    let mut result = k;

    for _ in 0..n {
        let leading_bit = (result >> 27) & 1;
        let shifted = (result << 1) & MASK_RIGHT_28_BIT;

        result = shifted | leading_bit;
    }
    result
}

/// For a given 6-bit `chunk` returns a 4-bit output from the `s_box`.
fn substitute(chunk: u64, s_box: &[u8; 64]) -> u64 {
    let row = ((chunk >> 4) & 0b10) | (chunk & 1);
    let col = (chunk & 0b11111) >> 1;
    s_box[(16 * row + col) as usize] as u64
}

/// Splits a 48-bit value into eight 6-bit chunks.
fn split_6bit_chunks(block: u64) -> [u64; 8] {
    core::array::from_fn(|i| (block >> (48 - (i + 1) * 6)) & 0b111111)
}

/// Merges eight 4-bit chunks into one 32-bit value.
fn merge_4bit_chunks(chunks: [u64; 8]) -> u64 {
    let mut result: u64 = 0;
    for chunk in chunks {
        result <<= 4;
        result |= chunk;
    }
    result
}

/// Takes two parts (each <= 32-bit) and merges them into one double
/// `half_size`-bit value.
fn merge_halves(left: u64, right: u64, half_size: usize) -> u64 {
    assert!(half_size <= 32, "half_size cannot be bigger than 32 bits");
    let limit = 1u64 << half_size;
    assert!(
        left < limit && right < limit,
        "left or right half do not fit into {half_size} bits"
    );

    let mut merged: u64 = 0;

    for i in 0..half_size {
        merged = (merged << 1) | ((left >> (half_size - i - 1)) & 1);
    }
    for i in 0..half_size {
        merged = (merged << 1) | ((right >> (half_size - i - 1)) & 1);
    }

    merged
}
