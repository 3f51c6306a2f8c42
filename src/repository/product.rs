use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product, ProductUpdate};
use crate::domain::types::ProductId;
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, ProductChangeset,
};
use crate::repository::{DieselRepository, ProductReader, ProductWriter, RepositoryResult};

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let items = products::table
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok(items)
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .find(id.get())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }

    fn count_products(&self) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let total = products::table.count().get_result::<i64>(&mut conn)?;
        Ok(total as usize)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        // IMMEDIATE takes the write lock up front so two creators never read
        // the same maximum.
        let created = conn.immediate_transaction(|conn| {
            let max_id = products::table
                .select(diesel::dsl::max(products::id))
                .first::<Option<i32>>(conn)?
                .unwrap_or(0);
            let next_id = max_id.checked_add(1).ok_or_else(|| {
                diesel::result::Error::QueryBuilderError("product id space exhausted".into())
            })?;

            diesel::insert_into(products::table)
                .values(DbNewProduct::from_domain(next_id, product.clone()))
                .get_result::<DbProduct>(conn)
        })?;

        let created = created.try_into()?;
        Ok(created)
    }

    fn update_product(
        &self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let changes: ProductChangeset = update.clone().into();

        let updated = diesel::update(products::table.find(id.get()))
            .set(&changes)
            .get_result::<DbProduct>(&mut conn)
            .optional()?;

        let updated = updated.map(TryInto::try_into).transpose()?;
        Ok(updated)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(products::table.find(id.get()))
            .get_result::<DbProduct>(&mut conn)
            .optional()?;

        let deleted = deleted.map(TryInto::try_into).transpose()?;
        Ok(deleted)
    }

    fn delete_all_products(&self) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let affected = diesel::delete(products::table).execute(&mut conn)?;
        Ok(affected)
    }
}
