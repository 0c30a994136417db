pub mod aac;


/// A stateless output format that needs some context to produce its bytes.
pub trait WriteFormat<I> {
    type Context;
    type Error;

    fn write_format(&self, input: I, ctx: &Self::Context) -> Result<Vec<u8>, Self::Error>;
}


/// A stateful coder that knows how to produce the output format `F`.
pub trait FormatWriter<F> {
    type Error;
    type Input;

    fn write_format(&mut self, format: F, input: Self::Input) -> Result<Vec<u8>, Self::Error>;
}
