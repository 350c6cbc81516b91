use rand::RngCore;

fn random_hex(n_bytes: usize) -> String {
    let mut bytes = vec![0u8; n_bytes];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Account numbers are 10 lowercase hex characters (5 random bytes).
pub fn generate_account_number() -> String {
    random_hex(5)
}

/// Debit card numbers are 16 lowercase hex characters (8 random bytes).
pub fn generate_debit_card_number() -> String {
    random_hex(8)
}
