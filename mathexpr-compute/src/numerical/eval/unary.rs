use mathexpr_ast::{ast::{Unary, UnaryOpKind}, real::Real};
use mathexpr_error::Error;
use crate::{
    ctxt::Ctxt,
    error::MalformedOperator,
    numerical::eval::{finite, Eval},
};

impl Eval for Unary {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Real, Error> {
        if self.op == UnaryOpKind::Unspecified {
            return Err(ctxt.error(MalformedOperator));
        }

        let operand = ctxt.with_child(0, |ctxt| self.operand.eval(ctxt))?;
        match self.op {
            UnaryOpKind::Neg => finite(-operand, ctxt),
            UnaryOpKind::Pos | UnaryOpKind::Unspecified => Ok(operand),
        }
    }
}
