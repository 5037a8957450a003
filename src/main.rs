fn main() {
    #[cfg(feature = "csr")]
    surat::mount();
}
