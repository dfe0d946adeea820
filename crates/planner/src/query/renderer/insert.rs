use crate::query::{
    ast::insert::Insert,
    renderer::{Render, Renderer},
};

impl Render for Insert {
    fn render(&self, r: &mut Renderer) {
        // 1. INSERT INTO table (...)
        r.sql.push_str("INSERT INTO ");
        self.table.render(r);
        r.sql.push_str(" (");
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            r.push_identifier(column);
        }
        r.sql.push(')');

        // 2. VALUES (...)
        r.sql.push_str(" VALUES (");
        r.push_list(&self.values);
        r.sql.push(')');

        // 3. RETURNING ...
        if !self.returning.is_empty() {
            r.sql.push_str(" RETURNING ");
            r.push_list(&self.returning);
        }
    }
}
