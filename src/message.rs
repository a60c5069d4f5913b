use crate::types::CommitFields;

/// Render collected fields as a commit message: `type(scope): subject`, then
/// a blank line and the body when one was given.
pub fn assemble(fields: &CommitFields) -> String {
   let mut msg = String::with_capacity(
      fields.commit_type.len() + fields.scope.len() + fields.subject.len() + fields.body.len() + 6,
   );
   msg.push_str(&fields.commit_type);
   if !fields.scope.is_empty() {
      msg.push('(');
      msg.push_str(&fields.scope);
      msg.push(')');
   }
   msg.push_str(": ");
   msg.push_str(&fields.subject);

   if !fields.body.is_empty() {
      msg.push_str("\n\n");
      msg.push_str(&fields.body);
   }
   msg
}
