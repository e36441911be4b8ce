use gost_curve::{CurveGroup, DomainParams};
use gost_signature::{HashWidth, KeyPair, Signature, Verification};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let params = DomainParams::gost_example_256();
    let curve = params.build().expect("params");
    let mut rng = rand::rng();

    let keys = KeyPair::generate(&curve, &mut rng).expect("keygen");
    let keys_bytes = bincode::serialize(&keys).expect("serialize keys");
    let params_bytes = bincode::serialize(&params).expect("serialize params");

    let msg = b"hello gost";
    let width = HashWidth::W512;
    let sig = keys
        .signing_key()
        .sign(&curve, &mut rng, &width, msg)
        .expect("sign");
    let sig_bytes = sig.to_bytes();
    println!("signature: {sig}");

    let params2: DomainParams = bincode::deserialize(&params_bytes).expect("deserialize params");
    let curve2: CurveGroup = params2.build().expect("params");
    let keys2: KeyPair = bincode::deserialize(&keys_bytes).expect("deserialize keys");
    let sig2 = Signature::from_bytes(width, &sig_bytes).expect("decode signature");

    let ok = keys2
        .verifying_key()
        .verify(&curve2, &width, msg, &sig2)
        .expect("verify");
    assert_eq!(ok, Verification::Valid);
    println!("public key: {}", keys2.verifying_key().point());
}
