use foobar_puzzles::decode_cipher;

fn main() {
    println!(
        "{}",
        decode_cipher("Yvzs! I xzm'g yvorvev Lzmxv olhg srh qly zg gsv xlolmb!!")
    );
    println!("{}", decode_cipher("wrw blf hvv ozhg mrtsg'h vkrhlwv?"));
}
