use mathexpr_ast::{real::Real, Expr};
use mathexpr_error::Error;
use crate::{
    ctxt::Ctxt,
    error::{MalformedOperator, UnboundVariable},
    numerical::eval::{finite, Eval},
};

impl Eval for Expr {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Real, Error> {
        let value = match self {
            Expr::Constant(real) => finite(*real, ctxt),
            Expr::Variable(name) => Err(ctxt.error(UnboundVariable { name: name.clone() })),
            Expr::Binary(binary) => binary.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
            Expr::Group(group) => ctxt.with_child(0, |ctxt| group.expr.eval(ctxt)),
            Expr::Unset => Err(ctxt.error(MalformedOperator)),
        }?;
        tracing::trace!(expr = %self, %value, "evaluated");
        Ok(value)
    }
}
