use mathexpr_ast::{ast::{Binary, BinOpKind}, real::{ArithmeticError, Real}};
use mathexpr_error::Error;
use crate::{
    ctxt::Ctxt,
    error::{DivisionByZero, MalformedOperator},
    numerical::eval::{arithmetic_error, finite, Eval},
};

impl Eval for Binary {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Real, Error> {
        if self.op.kind == BinOpKind::Unspecified {
            return Err(ctxt.error(MalformedOperator));
        }

        let lhs = ctxt.with_child(0, |ctxt| self.lhs.eval(ctxt))?;
        let rhs = ctxt.with_child(1, |ctxt| self.rhs.eval(ctxt))?;
        let value = match self.op.kind {
            BinOpKind::Add => lhs + rhs,
            BinOpKind::Sub => lhs - rhs,
            BinOpKind::Mul => lhs * rhs,
            BinOpKind::Div => lhs.checked_div(rhs).map_err(|err| match err {
                // point at the denominator
                ArithmeticError::DivisionByZero => ctxt.child_error(1, DivisionByZero),
                err => arithmetic_error(err, ctxt),
            })?,
            BinOpKind::Exp => lhs.pow(rhs).map_err(|err| arithmetic_error(err, ctxt))?,
            BinOpKind::Unspecified => return Err(ctxt.error(MalformedOperator)),
        };
        finite(value, ctxt)
    }
}
