use mathexpr_ast::{ast::{Call, FunctionKind}, real::Real};
use mathexpr_error::Error;
use crate::{
    ctxt::Ctxt,
    error::MalformedOperator,
    numerical::eval::{arithmetic_error, Eval},
};

impl Eval for Call {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Real, Error> {
        match self.func {
            FunctionKind::SquareRoot => {
                let arg = ctxt.with_child(0, |ctxt| self.arg.eval(ctxt))?;
                arg.sqrt().map_err(|err| arithmetic_error(err, ctxt))
            },
            FunctionKind::Unspecified => Err(ctxt.error(MalformedOperator)),
        }
    }
}
